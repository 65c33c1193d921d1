// Compiles the foreign AXPY kernels in csrc/axpy.c.
//
// The C translation unit is built with aggressive optimization so the
// compiler can auto-vectorize the loops. `-march=native` ties the object
// to the build host; set AXPY_NATIVE=0 to leave it out.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=csrc/axpy.c");
    println!("cargo:rerun-if-env-changed=AXPY_NATIVE");

    if std::env::var_os("CARGO_FEATURE_FFI").is_none() {
        return;
    }

    let native = std::env::var("AXPY_NATIVE").map_or(true, |v| v != "0");

    let mut build = cc::Build::new();
    build.file("csrc/axpy.c").opt_level(3).warnings(true);

    if native {
        build.flag_if_supported("-march=native");
    }
    // Honors `#pragma omp simd` without pulling in the OpenMP runtime.
    build.flag_if_supported("-fopenmp-simd");
    build.flag_if_supported("-ftree-vectorize");

    build.compile("axpy");
}
