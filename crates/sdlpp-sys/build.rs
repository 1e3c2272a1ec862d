use std::path::Path;

fn main() {
    println!("cargo:rerun-if-env-changed=SDL2_LIB_PATH");

    // Priority 1: explicit library directory (CI, vendored builds)
    if let Ok(lib_path) = std::env::var("SDL2_LIB_PATH") {
        println!("cargo:rustc-link-search=native={}", lib_path);
    }
    // Priority 2: Homebrew on Apple silicon
    else if Path::new("/opt/homebrew/lib").exists() {
        println!("cargo:rustc-link-search=native=/opt/homebrew/lib");
    }
    // Priority 3: System-installed SDL2
    else {
        println!("cargo:rustc-link-search=native=/usr/local/lib");
    }

    #[cfg(target_os = "macos")]
    println!("cargo:rustc-link-lib=dylib=SDL2");

    #[cfg(target_os = "windows")]
    println!("cargo:rustc-link-lib=dylib=SDL2");

    #[cfg(target_os = "linux")]
    println!("cargo:rustc-link-lib=dylib=SDL2");
}
