//! Walks through every list operation and prints the results.
//!
//! Set `RUST_LOG=int_list=trace` to watch the list resize itself.

use int_list::IntList;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), anyhow::Error> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut list = IntList::new();
    list.add(176)?;
    list.add_all(&[22, 34435])?;
    println!("list: {list}");

    let mut other = IntList::new();
    other.add(7)?;
    list.add_list(&other)?;
    println!("joined list: {list}");

    let filtered = list.filter(|x, _| x < 25)?;
    println!("filtered: {filtered}");
    filtered.destruct();

    let doubled = list.map(|x, _| x * 2)?;
    println!("doubled: {doubled}");

    println!("sum: {}", list.reduce(|acc, x, _| acc + x, 0));
    list.for_each(|x, i| println!("index {i} -> {x}"));

    println!("index of 34435: {:?}", list.index_of(34435));
    println!("contains 8: {}", list.contains(8));

    list.remove(0)?;
    list.remove(2)?;
    println!("list: {list} with length {}", list.len());

    if let Err(err) = list.remove(5) {
        info!(%err, "removal rejected as expected");
    }

    list.destruct();
    Ok(())
}
