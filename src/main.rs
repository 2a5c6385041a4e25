fn main() {
    halcyon::uci::run();
}
