//! Builds a few vectors and prints the results of the basic operations on them.
//!
//! Run with `RUST_LOG=euclid=trace` to see cache hits and misses.

use euclid::{dot, norm, unit, vector, Vector};

fn main() -> anyhow::Result<()> {
    euclid::init_logger!();

    let a = vector![3.0, 3.0, 3.0];
    let b = vector![1.0, 1.0, 1.0];

    log::info!("a = {a}, b = {b}");
    println!("a + b = {}", (&a + &b)?);
    println!("a - b = {}", (&a - &b)?);
    println!("2 * a = {}", 2.0 * &a);
    println!("a / 3 = {}", (&a / 3.0)?);
    println!("-b = {}", -&b);

    // The second call is answered from `a`'s cache.
    println!("a . a = {}", dot(&a, &a)?);
    println!("a . a = {}", dot(&a, &a)?);
    println!("a . b = {}", dot(&a, &b)?);
    println!("|a| = {}", norm(&a));
    println!("unit(a) = {:.4}", unit(&a)?);

    let sum = Vector::splat(3, 3.0) + Vector::splat(3, 3.0) + Vector::splat(3, 3.0);
    println!("sum = {}", sum?);

    let mut c = a.clone();
    c[0] = 0.0;
    println!("c = {c}, |c| = {}", norm(&c));

    match unit(&Vector::new(2)) {
        Ok(u) => println!("unit(0) = {u}"),
        Err(e) => log::warn!("unit(0) failed: {e}"),
    }
    if let Err(e) = Vector::new(4) + Vector::new(3) {
        log::warn!("{e}");
    }

    Ok(())
}
