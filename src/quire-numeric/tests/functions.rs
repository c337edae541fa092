use quire_numeric::*;

const P: PropertyId = PropertyId(0);

#[test]
fn rounding_functions() -> Result<(), Error> {
    let n = Numeric::number(P, 2.3);
    assert_eq!(n.ceiling()?, 3.0);
    assert_eq!(n.floor()?, 2.0);
    assert_eq!(n.round()?, 2);

    assert_eq!(Numeric::number(P, 2.5).round()?, 3);
    // Halves round towards positive infinity.
    assert_eq!(Numeric::number(P, -2.5).round()?, -2);
    assert_eq!(Numeric::number(P, -2.3).floor()?, -3.0);

    // Neither the largest double below one half nor odd integers past
    // 2^52 may be pushed up by the rounding itself.
    assert_eq!(Numeric::number(P, 0.49999999999999994).round()?, 0);
    assert_eq!(
        Numeric::number(P, 4503599627370497.0).round()?,
        4503599627370497
    );
    assert_eq!(Numeric::number(P, -0.5).round()?, 0);

    Ok(())
}

#[test]
fn abs() -> Result<(), Error> {
    assert_eq!(Numeric::number(P, -4.0).abs()?, 4.0);
    // Relative lengths have power zero too.
    assert_eq!(Numeric::percentage(P, -50.0).abs()?, 0.5);

    Ok(())
}

#[test]
fn require_power_zero() {
    let n = Numeric::length(P, 2.3, LengthUnit::Point);

    assert_eq!(
        n.abs(),
        Err(Error::DimensionError {
            function: "abs",
            power: 1
        })
    );
    assert!(matches!(
        n.ceiling(),
        Err(Error::DimensionError { function: "ceiling", .. })
    ));
    assert!(matches!(
        n.floor(),
        Err(Error::DimensionError { function: "floor", .. })
    ));
    assert!(matches!(
        n.round(),
        Err(Error::DimensionError { function: "round", .. })
    ));
}

#[test]
fn max_and_min() -> Result<(), Error> {
    let a = Numeric::number(P, 3.0);
    let b = Numeric::number(P, -1.0);

    assert_eq!(a.max(&b)?, 3.0);
    assert_eq!(a.min(&b)?, -1.0);
    assert_eq!(b.max(&Numeric::percentage(P, 50.0))?, 0.5);

    Ok(())
}

#[test]
fn max_and_min_require_power_zero() {
    let len = Numeric::length(P, 1.0, LengthUnit::Point);
    let num = Numeric::number(P, 1.0);

    assert_eq!(
        len.max(&num),
        Err(Error::DimensionError {
            function: "max",
            power: 1
        })
    );
    assert_eq!(
        num.min(&len),
        Err(Error::DimensionError {
            function: "min",
            power: 1
        })
    );
    // Matching powers are not enough; they must be zero.
    assert!(len.max(&len.clone()).is_err());
}
