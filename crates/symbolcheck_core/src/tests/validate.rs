use crate::symbols::SymbolValidator;

use super::fixtures::{ELEMENT_MAX_SIZE, capitalize};

#[test]
fn integration_symbols_must_have_two_letters() {
    #[cfg(feature = "symbolcheck_tracing")]
    crate::symbolcheck_tracing::init();
    let element = capitalize(&"a".repeat(ELEMENT_MAX_SIZE));
    let validator = SymbolValidator::new(&element);

    for size in 0..ELEMENT_MAX_SIZE {
        let symbol = &element[..size];
        assert_eq!(validator.validate(symbol), size == 2, "symbol '{symbol}' of length {size}");
    }

    assert_invalid!("Boron", "B");
}

#[test]
fn integration_both_letters_must_appear_in_element() {
    #[cfg(feature = "symbolcheck_tracing")]
    crate::symbolcheck_tracing::init();
    assert_valid!("Mercury", "Cy");
    assert_invalid!("Mercury", "Hg");
    assert_invalid!("Mercury", "Mg");
    assert_invalid!("Mercury", "Gm");
}

#[test]
fn integration_letters_must_appear_in_order() {
    #[cfg(feature = "symbolcheck_tracing")]
    crate::symbolcheck_tracing::init();
    assert_valid!("Silver", "Vr");
    assert_invalid!("Silver", "Rv");

    let magnesium = SymbolValidator::new("Magnesium");
    assert!(magnesium.validate("Ma"));
    assert!(magnesium.validate("Am"));
}

#[test]
fn integration_repeated_letters_must_appear_twice() {
    #[cfg(feature = "symbolcheck_tracing")]
    crate::symbolcheck_tracing::init();
    let xenon = SymbolValidator::new("Xenon");
    assert!(xenon.validate("Nn"));
    assert!(!xenon.validate("Oo"));
    assert!(!xenon.validate("Xx"));
}

#[test]
fn integration_validate_examples() {
    #[cfg(feature = "symbolcheck_tracing")]
    crate::symbolcheck_tracing::init();
    assert_valid!("Spenglerium", "Ee");
    assert_valid!("Zeddemorium", "Zr");
    assert_valid!("Venkmine", "Kn");
    assert_invalid!("Stantzon", "Zt");
    assert_invalid!("Melintzum", "Nn");
    assert_invalid!("Tullium", "Ty");
}

#[test]
fn integration_validate_ignores_case() {
    #[cfg(feature = "symbolcheck_tracing")]
    crate::symbolcheck_tracing::init();
    for symbol in ["Cy", "cy", "CY", "cY"] {
        assert_valid!("Mercury", symbol);
        assert_valid!("MERCURY", symbol);
        assert_valid!("mercury", symbol);
    }
}

#[test]
fn integration_validator_is_shareable() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<SymbolValidator>();

    let validator = SymbolValidator::new("Mercury");
    let validator = &validator;
    std::thread::scope(|scope| {
        let handles: Vec<_> =
            (0..4).map(|_| scope.spawn(move || validator.validate("Cy"))).collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}
