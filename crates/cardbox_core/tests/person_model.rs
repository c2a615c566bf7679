use cardbox_core::{Person, PersonValidationError};

fn alex() -> Person {
    Person::new(
        "Alex Yeoh",
        "87438807",
        "alexyeoh@example.com",
        "Blk 30 Geylang Street 29",
        "12-2024",
    )
}

#[test]
fn equality_is_value_based_over_all_fields() {
    let a = alex();
    let b = alex();
    assert_eq!(a, b);

    let c = a.with_appointment_date("01-2025");
    assert_ne!(a, c);
}

#[test]
fn validate_accepts_well_formed_person() {
    assert_eq!(alex().validate(), Ok(()));
}

#[test]
fn validate_rejects_blank_and_malformed_fields() {
    let mut blank_name = alex();
    blank_name.name = "".to_string();
    assert!(matches!(
        blank_name.validate(),
        Err(PersonValidationError::InvalidName(_))
    ));

    let mut bad_phone = alex();
    bad_phone.phone = "phone".to_string();
    assert!(matches!(
        bad_phone.validate(),
        Err(PersonValidationError::InvalidPhone(_))
    ));

    let mut bad_email = alex();
    bad_email.email = "not-an-email".to_string();
    assert!(matches!(
        bad_email.validate(),
        Err(PersonValidationError::InvalidEmail(_))
    ));

    let mut blank_appt = alex();
    blank_appt.appointment_date = "   ".to_string();
    assert_eq!(
        blank_appt.validate(),
        Err(PersonValidationError::BlankAppointmentDate)
    );
}

#[test]
fn person_serialization_uses_expected_wire_fields() {
    let person = alex();
    let json = serde_json::to_value(&person).unwrap();

    assert_eq!(json["name"], "Alex Yeoh");
    assert_eq!(json["phone"], "87438807");
    assert_eq!(json["email"], "alexyeoh@example.com");
    assert_eq!(json["address"], "Blk 30 Geylang Street 29");
    assert_eq!(json["appointment_date"], "12-2024");

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}
