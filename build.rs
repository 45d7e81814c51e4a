fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let stamp = chrono::Utc::now().format("%Y-%m-%dT%H:%MZ");
    println!("cargo:rustc-env=BUILD_DATE={}", stamp);
}
