use propdoc::{
    domain::{Car, Part},
    prelude::*,
};
use serde_json::json;

fn part(kind: &str, model: &str, price: i64) -> Properties {
    Properties::builder()
        .with(Property::Type, kind)
        .with(Property::Model, model)
        .with(Property::Price, price)
        .build()
}

fn car() -> Car {
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

#[test]
fn car_reads_model_price_and_parts() {
    let car = car();

    assert_eq!(car.model().unwrap().as_deref(), Some("300SL"));
    assert_eq!(car.price().unwrap(), Some(10000));

    let parts = car.parts().unwrap().collect::<Vec<_>>();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].type_name().unwrap().as_deref(), Some("wheel"));
    assert_eq!(parts[0].model().unwrap().as_deref(), Some("15C"));
    assert_eq!(parts[0].price().unwrap(), Some(100));
    assert_eq!(parts[1].type_name().unwrap().as_deref(), Some("door"));
    assert_eq!(parts[1].model().unwrap().as_deref(), Some("Lambo"));
    assert_eq!(parts[1].price().unwrap(), Some(300));
}

#[test]
fn parts_are_rebuilt_from_current_contents() {
    let mut car = car();
    assert_eq!(car.parts().unwrap().count(), 2);

    car.put(Property::Parts, vec![part("hood", "Gullwing", 900)]);

    let parts = car.parts().unwrap().collect::<Vec<_>>();
    assert_eq!(parts, vec![Part::from(part("hood", "Gullwing", 900))]);
}

#[test]
fn car_without_parts_has_no_children() {
    let car = Car::from_properties(Properties::builder().with(Property::Model, "Beetle").build());

    assert_eq!(car.parts().unwrap().count(), 0);
    assert_eq!(car.price().unwrap(), None);
}

#[test]
fn car_built_from_json_matches_builder() {
    let from_json = Car::from_json(json!({
        "model": "300SL",
        "price": 10000,
        "parts": [
            { "type": "wheel", "model": "15C", "price": 100 },
            { "type": "door", "model": "Lambo", "price": 300 },
        ],
    }))
    .unwrap();

    assert_eq!(from_json, car());
}

#[test]
fn car_renders_all_entries() {
    let car = Car::from_properties(
        Properties::builder()
            .with(Property::Model, "300SL")
            .with(Property::Parts, vec![part("wheel", "15C", 100)])
            .build(),
    );

    assert_eq!(
        car.to_string(),
        "Car[[model : 300SL][parts : [{model: 15C, price: 100, type: wheel}]]]"
    );
    assert_eq!(
        car.parts().unwrap().next().unwrap().to_string(),
        "Part[[model : 15C][price : 100][type : wheel]]"
    );
}

#[test]
fn same_storage_different_capabilities() {
    let props = part("wheel", "15C", 100);
    let as_car = Car::from_properties(props.clone());
    let as_part = Part::from_properties(props);

    assert_eq!(as_car.properties(), as_part.properties());
    assert_eq!(as_car.model().unwrap(), as_part.model().unwrap());
    // a car has no `type` view; the value is still reachable through `get`
    assert_eq!(as_car.get(Property::Type), Some(&Value::from("wheel")));
}
