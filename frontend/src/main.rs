fn main() {
    absensi_frontend::start();
}
