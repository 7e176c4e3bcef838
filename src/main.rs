use anyhow::Context;

fn main() -> anyhow::Result<()> {
    sketchpad::run().context("sketchpad failed")
}
