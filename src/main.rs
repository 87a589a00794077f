use podium::error::AppResult;

fn main() -> AppResult<()> {
    podium::entry::run()
}
