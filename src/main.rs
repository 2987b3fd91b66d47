fn main() {
    ci_jobs::app::cli::run();
}
