// File: crates/schedule-core/build.rs
// Summary: Links the Windows registry API that skia-safe's font manager pulls in.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // FontMgr::default enumerates system fonts via RegOpenKeyExW and friends.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
