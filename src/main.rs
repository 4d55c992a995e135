fn main() -> anyhow::Result<()> {
    aoc2020::cli::runner_main()
}
