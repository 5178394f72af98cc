// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU pull in.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW
        println!("cargo:rustc-link-lib=advapi32");
    }
}
