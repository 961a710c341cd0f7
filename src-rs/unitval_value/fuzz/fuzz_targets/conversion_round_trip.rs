#![no_main]

use libfuzzer_sys::fuzz_target;
use shared::ConvertibleUnits;
use unitval_value::Quantity;

fuzz_target!(|data: ConvertibleUnits| {
    let ConvertibleUnits { from, to, value } = data;

    let quantity = Quantity::new(value, from.clone());

    let converted = quantity
        .convert_to(&to)
        .expect("units with the same dimensions always convert");
    let back = converted
        .convert_to(&from)
        .expect("units with the same dimensions always convert");

    assert_eq!(converted.unit(), &to);
    assert_eq!(back.unit(), &from);

    // the round trip goes through SI values, which can be up to 1e6 times
    // larger than the input for the factors and offsets generated here
    let tolerance = 1e-6 * value.abs().max(1e3);
    assert!(
        (back.value() - value).abs() <= tolerance,
        "expected: {}, actual: {}",
        value,
        back.value()
    );

    let si = quantity.to_si();
    assert_eq!(si.unit().factor(), 1.0);
    assert_eq!(si.unit().offset(), 0.0);
    assert!(si.unit().dimensionally_eq(&from));
});
