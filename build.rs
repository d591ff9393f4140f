fn main() {
    // Wire up the ESP-IDF build environment only when targeting the device;
    // host builds (tests, clippy) have no IDF toolchain to propagate.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
