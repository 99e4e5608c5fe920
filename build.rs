use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(parallel_runtime)");
    println!("cargo:rerun-if-changed=build.rs");

    // The `parallel` feature pulls in rayon; surface it as a cfg flag so the
    // probe reads a build-time constant rather than a feature name.
    if env::var("CARGO_FEATURE_PARALLEL").is_ok() {
        println!("cargo:rustc-cfg=parallel_runtime");
    }
}
