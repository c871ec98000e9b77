fn main() {
    seizuretrack_lib::run()
}
