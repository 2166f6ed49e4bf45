fn main() {
    rebless::cli::run();
}
