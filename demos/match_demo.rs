//! Walkthrough of both matcher modes.
//!
//! Run with `cargo run --example match_demo`. Set `RUST_LOG=closest=trace`
//! to watch the structured events each lookup emits.

use std::error::Error;

use closest::{Matcher, Point};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    memoizing_demo()?;
    consuming_demo()?;
    Ok(())
}

/// Repeated queries against a memoizing matcher: the second identical query
/// is answered from the cache without rescanning.
fn memoizing_demo() -> Result<(), Box<dyn Error>> {
    println!("== memoizing ==");

    let mut matcher = Matcher::memoizing(vec![
        Point::Scalar(1.0),
        Point::Scalar(5.0),
        Point::Scalar(9.0),
    ])?;

    for query in [5.0, 4.0, 4.0, 8.5] {
        if let Some(hit) = matcher.nearest(&Point::Scalar(query))? {
            println!(
                "query {:>4}: closest {:?} at index {} (distance {})",
                query, hit.closest, hit.index, hit.distance
            );
        }
    }
    println!("memoized answers held: {}", matcher.cached_queries());

    let mut plane = Matcher::memoizing(vec![
        Point::Vector(vec![0.0, 0.0]),
        Point::Vector(vec![3.0, 4.0]),
        Point::Vector(vec![1.0, 1.0]),
    ])?;
    let hit = plane
        .nearest(&Point::Vector(vec![2.0, 3.0]))?
        .ok_or("no hit for plane query")?;
    println!(
        "plane query [2, 3]: index {} (squared distance {})",
        hit.index, hit.distance
    );

    Ok(())
}

/// One-to-one pairing with a consuming matcher: three delivery requests each
/// claim the nearest unclaimed depot, then the matcher reports exhaustion.
fn consuming_demo() -> Result<(), Box<dyn Error>> {
    println!("== consuming ==");

    let depots = vec![
        Point::Vector(vec![0.0, 0.0]),
        Point::Vector(vec![10.0, 0.0]),
        Point::Vector(vec![0.0, 10.0]),
    ];
    let mut matcher = Matcher::consuming(depots)?;

    let requests = [vec![1.0, 1.0], vec![2.0, 1.0], vec![8.0, 8.0]];
    for request in requests {
        match matcher.nearest(&Point::Vector(request.clone()))? {
            Some(hit) => println!(
                "request {:?} -> depot {} (squared distance {})",
                request, hit.index, hit.distance
            ),
            None => println!("request {request:?} -> no depot left"),
        }
    }

    println!(
        "remaining {} / exhausted: {}",
        matcher.remaining(),
        matcher.is_exhausted()
    );

    matcher.reset();
    println!("after reset, remaining {}", matcher.remaining());

    Ok(())
}
