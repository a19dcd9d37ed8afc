fn main() {
    nes_test_report::cli::run();
}
