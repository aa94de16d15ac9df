//! Mock authentication flow.
//!
//! Mirrors the app's three entry paths: resident login, resident
//! registration (with a simulated SMS code), and driver login. Nothing is
//! persisted and no network is involved; the flow only validates input and
//! produces a [`Session`]. Registration and login both end on the location
//! step, where the home point is resolved through a [`LocationProvider`]
//! with a demo fallback when the device GPS fails.

use log::{info, warn};
use rand::Rng;

use crate::demo::DEFAULT_CENTER;
use crate::{
    EcoAlertError, GeoPoint, NotificationSettings, Resident, Result, UserRole,
};

/// Which entry path the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
    DriverLogin,
}

/// Current step of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    /// Credentials form
    Form,
    /// Phone verification (register only)
    Otp,
    /// Home location capture
    Location,
    /// Finished; a session is available
    Done,
}

/// Contents of the credentials form. Fields irrelevant to the chosen mode
/// may stay empty.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub name: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub route_id: Option<String>,
}

/// Result of a completed flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Citizen(Resident),
    Driver(DriverSession),
}

/// Driver session: no saved home, just the route being covered.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverSession {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub route_id: String,
    pub location: GeoPoint,
}

/// Source of the device position. The host app backs this with real GPS;
/// tests and the CLI use [`DemoLocationProvider`].
pub trait LocationProvider {
    fn current_position(&self) -> Result<GeoPoint>;
}

/// Always returns the Huancayo demo center.
#[derive(Debug, Default)]
pub struct DemoLocationProvider;

impl LocationProvider for DemoLocationProvider {
    fn current_position(&self) -> Result<GeoPoint> {
        Ok(DEFAULT_CENTER)
    }
}

/// State machine for one authentication attempt.
#[derive(Debug)]
pub struct AuthFlow {
    mode: AuthMode,
    step: AuthStep,
    name: String,
    phone: String,
    route_id: Option<String>,
    issued_otp: Option<String>,
    session: Option<Session>,
}

impl AuthFlow {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            step: AuthStep::Form,
            name: String::new(),
            phone: String::new(),
            route_id: None,
            issued_otp: None,
            session: None,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn step(&self) -> AuthStep {
        self.step
    }

    /// The simulated SMS code, available after a register form submission.
    /// The mock UI displays it instead of sending a real SMS.
    pub fn issued_otp(&self) -> Option<&str> {
        self.issued_otp.as_deref()
    }

    /// The completed session, once the flow reaches [`AuthStep::Done`].
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Validate the credentials form and advance:
    /// register -> OTP, login -> location, driver -> done.
    pub fn submit_form(&mut self, form: &AuthForm) -> Result<AuthStep> {
        if self.step != AuthStep::Form {
            return Err(EcoAlertError::WrongAuthStep {
                expected: "form".to_string(),
            });
        }

        match self.mode {
            AuthMode::Register => {
                validate_name(&form.name)?;
                validate_phone(&form.phone)?;
                validate_password(&form.password)?;
                if form.password != form.confirm_password {
                    return Err(EcoAlertError::PasswordMismatch);
                }
                let route_id = form
                    .route_id
                    .clone()
                    .ok_or(EcoAlertError::RouteNotSelected)?;

                self.name = form.name.trim().to_string();
                self.phone = form.phone.clone();
                self.route_id = Some(route_id);
                self.issued_otp = Some(generate_otp());
                self.step = AuthStep::Otp;
            }
            AuthMode::Login => {
                validate_phone(&form.phone)?;
                if form.password.is_empty() {
                    return Err(EcoAlertError::WeakPassword);
                }
                // The mock backend "recovers" the profile; we only keep the
                // phone and re-confirm the home location.
                self.phone = form.phone.clone();
                self.route_id = form.route_id.clone();
                self.step = AuthStep::Location;
            }
            AuthMode::DriverLogin => {
                let route_id = form
                    .route_id
                    .clone()
                    .ok_or(EcoAlertError::RouteNotSelected)?;
                info!("driver logged in on route {route_id}");
                self.session = Some(Session::Driver(DriverSession {
                    id: format!("driver-{route_id}"),
                    name: "Conductor EcoAlert".to_string(),
                    role: UserRole::Driver,
                    route_id,
                    location: DEFAULT_CENTER,
                }));
                self.step = AuthStep::Done;
            }
        }
        Ok(self.step)
    }

    /// Check the simulated SMS code and advance to the location step.
    pub fn verify_otp(&mut self, code: &str) -> Result<AuthStep> {
        if self.step != AuthStep::Otp {
            return Err(EcoAlertError::WrongAuthStep {
                expected: "otp".to_string(),
            });
        }
        match &self.issued_otp {
            Some(issued) if issued == code => {
                self.step = AuthStep::Location;
                Ok(self.step)
            }
            _ => Err(EcoAlertError::InvalidOtp),
        }
    }

    /// Resolve the home location through the provider and finish the flow
    /// with a citizen session.
    ///
    /// A provider failure is the one runtime error the app must survive: it
    /// falls back to the Huancayo demo center instead of aborting.
    pub fn resolve_home(&mut self, provider: &dyn LocationProvider) -> Result<AuthStep> {
        if self.step != AuthStep::Location {
            return Err(EcoAlertError::WrongAuthStep {
                expected: "location".to_string(),
            });
        }

        let (home, address) = match provider.current_position() {
            Ok(point) => (point, "GPS location".to_string()),
            Err(err) => {
                warn!("location provider failed ({err}); using demo center");
                (DEFAULT_CENTER, "Huancayo (demo location)".to_string())
            }
        };

        let name = if self.name.is_empty() {
            "Usuario Huancayo".to_string()
        } else {
            self.name.clone()
        };
        let route_id = self
            .route_id
            .clone()
            .unwrap_or_else(|| "r1".to_string());

        self.session = Some(Session::Citizen(Resident {
            id: format!("u-{}", self.phone),
            name,
            phone_number: self.phone.clone(),
            route_id,
            home,
            address,
            settings: NotificationSettings::default(),
        }));
        self.step = AuthStep::Done;
        Ok(self.step)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        Err(EcoAlertError::MissingName)
    } else {
        Ok(())
    }
}

fn validate_phone(phone: &str) -> Result<()> {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count() as u32;
    if digits < 9 {
        Err(EcoAlertError::InvalidPhone { digits })
    } else {
        Ok(())
    }
}

fn validate_password(password: &str) -> Result<()> {
    if password.len() < 4 {
        Err(EcoAlertError::WeakPassword)
    } else {
        Ok(())
    }
}

fn generate_otp() -> String {
    let code: u32 = rand::thread_rng().gen_range(100_000..=999_999);
    code.to_string()
}
