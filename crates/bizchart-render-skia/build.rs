// File: crates/bizchart-render-skia/build.rs
// Summary: Links advapi32 on Windows for this crate's skia-safe dependency (the core crate has no native deps).

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager and ICU read the registry (RegOpenKeyExW, RegQueryInfoKeyW).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
