//! Module registration form (pure).

use crate::api::Params;
use crate::state::text_input::TextInput;

/// Where the module to register is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModLocation {
    /// Maven Central; the registry resolves the artifact itself.
    #[default]
    MavenCentral,
    /// Another Maven repository; needs an explicit prefix URL.
    MavenOther,
    /// Bintray; the registry resolves the artifact itself.
    Bintray,
}

impl ModLocation {
    /// Locations in form order. The first one is the form's default.
    pub const ALL: [ModLocation; 3] = [
        ModLocation::MavenCentral,
        ModLocation::MavenOther,
        ModLocation::Bintray,
    ];

    /// Value of the `modLocation` parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            ModLocation::MavenCentral => "mavenCentral",
            ModLocation::MavenOther => "mavenOther",
            ModLocation::Bintray => "bintray",
        }
    }

    /// Option label in the form.
    pub fn label(self) -> &'static str {
        match self {
            ModLocation::MavenCentral => "Maven Central",
            ModLocation::MavenOther => "Other Maven repository",
            ModLocation::Bintray => "Bintray",
        }
    }

    /// Whether `modURL` must be supplied.
    pub fn requires_url(self) -> bool {
        matches!(self, ModLocation::MavenOther)
    }

    /// Label of the additional-information field.
    pub fn additional_label(self) -> &'static str {
        if self.requires_url() {
            "Maven prefix URL"
        } else {
            "No additional information needed"
        }
    }

    fn cycled(self, forward: bool) -> Self {
        let len = Self::ALL.len();
        let index = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Self::ALL[next]
    }
}

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    /// Module name.
    #[default]
    Name,
    /// Location selector.
    Location,
    /// Prefix URL (only reachable when the location requires it).
    Url,
}

/// State of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Module name input.
    pub name: TextInput,
    /// Selected location.
    pub location: ModLocation,
    /// Prefix URL input.
    pub url: TextInput,
    /// Focused field.
    pub focus: RegisterField,
    submitting: bool,
}

impl RegistrationForm {
    /// Empty form with the default location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission is in flight (the submit control is disabled).
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Label of the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Checking validity of module ..."
        } else {
            "Register"
        }
    }

    /// Request parameters. `modURL` only when the location requires it.
    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert("modName".to_string(), self.name.value().to_string());
        params.insert(
            "modLocation".to_string(),
            self.location.as_param().to_string(),
        );
        if self.location.requires_url() {
            params.insert("modURL".to_string(), self.url.value().to_string());
        }
        params
    }

    /// Mark the form as submitted; returns `false` if already submitting.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Re-enable the submit control after a reply.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Clear after a successful registration: first location, empty fields.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Move focus to the next field, skipping the URL when not required.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            RegisterField::Name => RegisterField::Location,
            RegisterField::Location if self.location.requires_url() => RegisterField::Url,
            RegisterField::Location | RegisterField::Url => RegisterField::Name,
        };
    }

    /// Cycle the location forward or backward.
    pub fn cycle_location(&mut self, forward: bool) {
        self.location = self.location.cycled(forward);
        if self.focus == RegisterField::Url && !self.location.requires_url() {
            self.focus = RegisterField::Location;
        }
    }

    /// Apply `f` to the focused text field. No-op on the selector.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut TextInput) -> R) -> Option<R> {
        match self.focus {
            RegisterField::Name => Some(f(&mut self.name)),
            RegisterField::Url => Some(f(&mut self.url)),
            RegisterField::Location => None,
        }
    }
}

/// Confirmation text after a successful registration.
pub fn confirmation_text(name: &str, mail_sent: bool) -> String {
    let notice = if mail_sent {
        "The moderators have been notified!"
    } else {
        "Could not notify moderators, please notify them through IRC or via the \
         mailing list to get your module approved quickly."
    };
    format!("{name} was successfully submitted for moderation.\n{notice}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::text_input::handle_char_input;

    fn form_with(name: &str, location: ModLocation, url: &str) -> RegistrationForm {
        RegistrationForm {
            name: TextInput::with_value(name),
            location,
            url: TextInput::with_value(url),
            ..RegistrationForm::new()
        }
    }

    #[test]
    fn catalog_locations_omit_url() {
        for location in [ModLocation::MavenCentral, ModLocation::Bintray] {
            let params = form_with("io.vertx~mod~1", location, "ignored").params();
            assert!(!params.contains_key("modURL"), "{:?}", location);
            assert_eq!(params.get("modName").map(String::as_str), Some("io.vertx~mod~1"));
        }
    }

    #[test]
    fn other_location_includes_url() {
        let params = form_with("m", ModLocation::MavenOther, "http://repo").params();
        assert_eq!(params.get("modLocation").map(String::as_str), Some("mavenOther"));
        assert_eq!(params.get("modURL").map(String::as_str), Some("http://repo"));
    }

    #[test]
    fn submit_disables_until_finished() {
        let mut form = RegistrationForm::new();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert_eq!(form.submit_label(), "Checking validity of module ...");
        form.finish_submit();
        assert_eq!(form.submit_label(), "Register");
    }

    #[test]
    fn reset_restores_first_location_and_clears_fields() {
        let mut form = form_with("m", ModLocation::Bintray, "u");
        form.reset();
        assert_eq!(form, RegistrationForm::new());
        assert_eq!(form.location, ModLocation::ALL[0]);
    }

    #[test]
    fn focus_skips_url_unless_required() {
        let mut form = RegistrationForm::new();
        form.focus_next();
        assert_eq!(form.focus, RegisterField::Location);
        form.focus_next();
        assert_eq!(form.focus, RegisterField::Name);

        form.location = ModLocation::MavenOther;
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus, RegisterField::Url);
    }

    #[test]
    fn leaving_other_location_moves_focus_off_url() {
        let mut form = form_with("m", ModLocation::MavenOther, "");
        form.focus = RegisterField::Url;
        form.cycle_location(true);
        assert_eq!(form.location, ModLocation::Bintray);
        assert_eq!(form.focus, RegisterField::Location);
    }

    #[test]
    fn location_cycles_both_ways() {
        let mut form = RegistrationForm::new();
        form.cycle_location(false);
        assert_eq!(form.location, ModLocation::Bintray);
        form.cycle_location(true);
        assert_eq!(form.location, ModLocation::MavenCentral);
    }

    #[test]
    fn edit_goes_to_focused_field() {
        let mut form = RegistrationForm::new();
        form.edit(|input| *input = handle_char_input(std::mem::take(input), 'x'));
        form.focus = RegisterField::Location;
        assert_eq!(form.edit(|input| input.value().len()), None);
        assert_eq!(form.name.value(), "x");
        assert!(form.url.is_empty());
    }

    #[test]
    fn confirmation_mentions_mail_outcome() {
        assert!(confirmation_text("m", true).contains("notified!"));
        assert!(confirmation_text("m", false).contains("Could not notify"));
        assert!(confirmation_text("m", false).starts_with("m was successfully"));
    }
}
