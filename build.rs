fn main() {
    // Exports ESP-IDF environment for cross builds; no-op on host builds
    // where the espidf feature (and thus embuild) is disabled.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
