//! Builds a car out of a wheel and a door and logs what its trait views report.
//!
//! Logging verbosity follows `RUST_LOG`, defaulting to `propdoc_core=info,car_demo=info`;
//! set `RUST_LOG=propdoc_core=debug` to see child traversals.

use anyhow::Result;
use propdoc::{domain::Car, prelude::*};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn part(kind: &str, model: &str, price: i64) -> Properties {
    Properties::builder()
        .with(Property::Type, kind)
        .with(Property::Model, model)
        .with(Property::Price, price)
        .build()
}

fn build_car() -> Car {
    Car::from_properties(
        Properties::builder()
            .with(Property::Model, "300SL")
            .with(Property::Price, 10000)
            .with(
                Property::Parts,
                vec![part("wheel", "15C", 100), part("door", "Lambo", 300)],
            )
            .build(),
    )
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |value| value.to_string())
}

/// The lines the demo logs for `car`, one per trait read.
fn report(car: &Car) -> DocumentResult<Vec<String>> {
    let mut lines = vec![
        "Here is our car:".to_owned(),
        format!("-> model: {}", or_dash(car.model()?)),
        format!("-> price: {}", or_dash(car.price()?)),
        "-> parts: ".to_owned(),
    ];

    for part in car.parts()? {
        lines.push(format!(
            "\t{}/{}/{}",
            or_dash(part.type_name()?),
            or_dash(part.model()?),
            or_dash(part.price()?),
        ));
    }

    Ok(lines)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("propdoc_core=info".parse()?)
                .add_directive("car_demo=info".parse()?),
        )
        .init();

    info!("Constructing parts and car");
    let car = build_car();

    for line in report(&car)? {
        info!("{line}");
    }
    info!("{car}");

    Ok(())
}
