use quire_numeric::{properties::PropertyTable, *};

fn table() -> PropertyTable {
    let mut table = PropertyTable::new();
    table.insert("width", Categories::LENGTH | Categories::PERCENTAGE);
    table.insert("column-count", Categories::NUMBER);
    table.insert("azimuth", Categories::ANGLE);
    table.insert("pitch", Categories::FREQUENCY);
    table.insert("pause-before", Categories::TIME);
    table
}

fn id(table: &PropertyTable, name: &str) -> PropertyId {
    table.property_index(name).unwrap()
}

#[test]
fn accepts_legal_values() -> Result<(), Error> {
    let table = table();

    Numeric::length(id(&table, "width"), 10.0, LengthUnit::Point).validate(&table)?;
    Numeric::percentage(id(&table, "width"), 50.0).validate(&table)?;
    Numeric::number(id(&table, "column-count"), 2.0).validate(&table)?;
    Numeric::angle(id(&table, "azimuth"), 90.0, AngleUnit::Degree).validate(&table)?;
    Numeric::frequency(id(&table, "pitch"), 120.0, FrequencyUnit::Hertz).validate(&table)?;
    Numeric::time(id(&table, "pause-before"), 1.0, TimeUnit::Second).validate(&table)?;

    Ok(())
}

#[test]
fn length_requires_power_one() -> Result<(), Error> {
    let table = table();
    let n = Numeric::make(
        id(&table, "width"),
        1000.0,
        BaseUnit::Millipoints,
        0,
        Unit::Length(LengthUnit::Point),
    )?;

    assert_eq!(
        n.validate(&table),
        Err(Error::Validation(ValidationError::UnitPower {
            base_unit: BaseUnit::Millipoints,
            power: 0
        }))
    );

    Ok(())
}

#[test]
fn squared_length_is_rejected() -> Result<(), Error> {
    let table = table();
    let width = id(&table, "width");

    let mut n = Numeric::length(width, 2.0, LengthUnit::Point);
    n.multiply(&Numeric::length(width, 2.0, LengthUnit::Point))?;

    assert!(matches!(
        n.validate(&table),
        Err(Error::Validation(ValidationError::UnitPower { power: 2, .. }))
    ));

    Ok(())
}

#[test]
fn category_is_checked_before_power_for_quantities() -> Result<(), Error> {
    let table = table();
    let count = id(&table, "column-count");

    let mut n = Numeric::length(count, 2.0, LengthUnit::Point);
    n.multiply(&Numeric::length(count, 2.0, LengthUnit::Point))?;

    assert_eq!(
        n.validate(&table),
        Err(Error::Validation(ValidationError::NotAllowed {
            property: count,
            category: Categories::LENGTH,
            legal: Categories::NUMBER
        }))
    );

    Ok(())
}

#[test]
fn category_not_allowed() {
    let table = table();
    let count = id(&table, "column-count");

    assert_eq!(
        Numeric::length(count, 1.0, LengthUnit::Inch).validate(&table),
        Err(Error::Validation(ValidationError::NotAllowed {
            property: count,
            category: Categories::LENGTH,
            legal: Categories::NUMBER
        }))
    );
    assert!(Numeric::percentage(count, 10.0).validate(&table).is_err());
    assert!(Numeric::number(id(&table, "azimuth"), 10.0)
        .validate(&table)
        .is_err());
}

#[test]
fn resolved_percentage_validates_as_length() -> Result<(), Error> {
    let table = table();
    let width = id(&table, "width");

    let mut n = Numeric::percentage(width, 50.0);
    n.multiply(&Numeric::length(width, 300.0, LengthUnit::Point))?;
    n.validate(&table)?;

    Ok(())
}

#[test]
fn ems_must_be_resolved_first() {
    let table = table();
    let n = Numeric::ems(id(&table, "width"), 1.2);

    assert_eq!(
        n.validate(&table),
        Err(Error::UnrecognizedUnit(BaseUnit::Ems))
    );
}

#[test]
fn unknown_property() {
    let table = table();
    let n = Numeric::number(PropertyId(42), 1.0);

    assert_eq!(
        n.validate(&table),
        Err(Error::Validation(ValidationError::UnknownProperty(PropertyId(42))))
    );
}

#[test]
fn diagnostics_names() -> Result<(), Error> {
    let table = table();
    let width = id(&table, "width");

    let mut n = Numeric::length(width, 6.0, LengthUnit::Pica);
    n.divide(&Numeric::length(width, 1.0, LengthUnit::Inch))?;

    assert_eq!(n.value(), 1.0);
    assert_eq!(n.base_unit_name(), "numeric");
    assert_eq!(n.original_base_unit_name(), "millipoints");
    assert_eq!(n.original_unit_name(), "pc");

    let err = Numeric::length(id(&table, "column-count"), 1.0, LengthUnit::Point)
        .validate(&table)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "length values are not accepted by property #1 (accepts number)"
    );

    Ok(())
}
