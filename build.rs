use std::env;
use std::fs;
use std::path::PathBuf;

/// Pass a build-time environment variable through to `env!`, with a default
fn passthrough(name: &str, default: &str, secret: bool) {
    match env::var(name) {
        Ok(value) => {
            println!("cargo:rustc-env={}={}", name, value);
            if secret {
                println!("cargo:warning=Using {} from environment (hidden)", name);
            } else {
                println!("cargo:warning=Using {} from environment: {}", name, value);
            }
        }
        Err(_) => println!("cargo:rustc-env={}={}", name, default),
    }
    println!("cargo:rerun-if-env-changed={}", name);
}

fn main() {
    // WiFi credentials (empty means WiFi is not configured)
    passthrough("WIFI_SSID", "", false);
    passthrough("WIFI_PASSWORD", "", true);

    // Report endpoint
    passthrough("REPORT_HOST", "server-y824.onrender.com", false);
    passthrough("REPORT_PATH", "/mensagem?msg=", false);
    passthrough("REPORT_INTERVAL_MS", "1000", false);

    // Linker script for the RP2040 firmware binary
    let target = env::var("TARGET").unwrap_or_default();
    if target.starts_with("thumbv6m") {
        let out = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
        fs::copy("memory.x", out.join("memory.x")).expect("memory.x is copied to OUT_DIR");
        println!("cargo:rustc-link-search={}", out.display());
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
    println!("cargo:rerun-if-changed=memory.x");
}
