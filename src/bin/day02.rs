fn main() -> anyhow::Result<()> {
    aoc2020::cli::day_main(2)
}
