//! Tests for the mock authentication flow

use ecoalert::auth::{
    AuthFlow, AuthForm, AuthMode, AuthStep, DemoLocationProvider, LocationProvider, Session,
};
use ecoalert::demo::DEFAULT_CENTER;
use ecoalert::{EcoAlertError, GeoPoint, Result, UserRole};

fn register_form() -> AuthForm {
    AuthForm {
        name: "Maria Quispe".to_string(),
        phone: "987654321".to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
        route_id: Some("r2".to_string()),
    }
}

/// Provider standing in for a device whose GPS is off.
struct FailingProvider;

impl LocationProvider for FailingProvider {
    fn current_position(&self) -> Result<GeoPoint> {
        Err(EcoAlertError::LocationUnavailable {
            reason: "permission denied".to_string(),
        })
    }
}

#[test]
fn test_register_happy_path() {
    let mut flow = AuthFlow::new(AuthMode::Register);
    assert_eq!(flow.step(), AuthStep::Form);

    assert_eq!(flow.submit_form(&register_form()).unwrap(), AuthStep::Otp);
    let code = flow.issued_otp().unwrap().to_string();
    assert_eq!(code.len(), 6);

    assert_eq!(flow.verify_otp(&code).unwrap(), AuthStep::Location);
    assert_eq!(
        flow.resolve_home(&DemoLocationProvider).unwrap(),
        AuthStep::Done
    );

    let Some(Session::Citizen(resident)) = flow.session() else {
        panic!("expected a citizen session");
    };
    assert_eq!(resident.id, "u-987654321");
    assert_eq!(resident.name, "Maria Quispe");
    assert_eq!(resident.route_id, "r2");
    assert_eq!(resident.home, DEFAULT_CENTER);
    assert_eq!(resident.address, "GPS location");
    assert!(resident.settings.enabled);
}

#[test]
fn test_register_form_validation() {
    let mut flow = AuthFlow::new(AuthMode::Register);

    let mut form = register_form();
    form.name = "   ".to_string();
    assert!(matches!(
        flow.submit_form(&form),
        Err(EcoAlertError::MissingName)
    ));

    let mut form = register_form();
    form.phone = "12345".to_string();
    assert!(matches!(
        flow.submit_form(&form),
        Err(EcoAlertError::InvalidPhone { digits: 5 })
    ));

    let mut form = register_form();
    form.password = "abc".to_string();
    form.confirm_password = "abc".to_string();
    assert!(matches!(
        flow.submit_form(&form),
        Err(EcoAlertError::WeakPassword)
    ));

    let mut form = register_form();
    form.confirm_password = "different".to_string();
    assert!(matches!(
        flow.submit_form(&form),
        Err(EcoAlertError::PasswordMismatch)
    ));

    let mut form = register_form();
    form.route_id = None;
    assert!(matches!(
        flow.submit_form(&form),
        Err(EcoAlertError::RouteNotSelected)
    ));

    // A failed submission leaves the flow on the form step
    assert_eq!(flow.step(), AuthStep::Form);
}

#[test]
fn test_wrong_otp_is_rejected() {
    let mut flow = AuthFlow::new(AuthMode::Register);
    flow.submit_form(&register_form()).unwrap();

    assert!(matches!(
        flow.verify_otp("000000"),
        Err(EcoAlertError::InvalidOtp)
    ));
    // Still on the OTP step; the right code recovers
    let code = flow.issued_otp().unwrap().to_string();
    assert_eq!(flow.verify_otp(&code).unwrap(), AuthStep::Location);
}

#[test]
fn test_login_skips_otp() {
    let mut flow = AuthFlow::new(AuthMode::Login);
    let form = AuthForm {
        phone: "912345678".to_string(),
        password: "pw".to_string(),
        ..Default::default()
    };
    assert_eq!(flow.submit_form(&form).unwrap(), AuthStep::Location);
    flow.resolve_home(&DemoLocationProvider).unwrap();

    let Some(Session::Citizen(resident)) = flow.session() else {
        panic!("expected a citizen session");
    };
    // Defaults fill in the profile the mock backend does not store
    assert_eq!(resident.name, "Usuario Huancayo");
    assert_eq!(resident.route_id, "r1");
}

#[test]
fn test_login_requires_password() {
    let mut flow = AuthFlow::new(AuthMode::Login);
    let form = AuthForm {
        phone: "912345678".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        flow.submit_form(&form),
        Err(EcoAlertError::WeakPassword)
    ));
}

#[test]
fn test_driver_login_finishes_on_form() {
    let mut flow = AuthFlow::new(AuthMode::DriverLogin);
    let form = AuthForm {
        route_id: Some("r3".to_string()),
        ..Default::default()
    };
    assert_eq!(flow.submit_form(&form).unwrap(), AuthStep::Done);

    let Some(Session::Driver(driver)) = flow.session() else {
        panic!("expected a driver session");
    };
    assert_eq!(driver.role, UserRole::Driver);
    assert_eq!(driver.route_id, "r3");
    assert_eq!(driver.id, "driver-r3");
}

#[test]
fn test_failed_provider_falls_back_to_demo_center() {
    let mut flow = AuthFlow::new(AuthMode::Login);
    let form = AuthForm {
        phone: "912345678".to_string(),
        password: "pw".to_string(),
        ..Default::default()
    };
    flow.submit_form(&form).unwrap();
    flow.resolve_home(&FailingProvider).unwrap();

    let Some(Session::Citizen(resident)) = flow.session() else {
        panic!("expected a citizen session");
    };
    assert_eq!(resident.home, DEFAULT_CENTER);
    assert_eq!(resident.address, "Huancayo (demo location)");
}

#[test]
fn test_steps_must_run_in_order() {
    let mut flow = AuthFlow::new(AuthMode::Register);

    assert!(matches!(
        flow.verify_otp("123456"),
        Err(EcoAlertError::WrongAuthStep { .. })
    ));
    assert!(matches!(
        flow.resolve_home(&DemoLocationProvider),
        Err(EcoAlertError::WrongAuthStep { .. })
    ));

    flow.submit_form(&register_form()).unwrap();
    assert!(matches!(
        flow.submit_form(&register_form()),
        Err(EcoAlertError::WrongAuthStep { .. })
    ));
}
