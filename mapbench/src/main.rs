fn main() -> anyhow::Result<()> {
    mapbench::run()
}
