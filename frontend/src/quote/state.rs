use std::collections::BTreeSet;
use std::rc::Rc;

use yew::Reducible;

use crate::i18n::Language;
use crate::quote::form::{FormStep, QuoteField, QuoteFormData};
use crate::quote::mailto::{build_mailto, MailtoLink};
use crate::quote::validation::{validate, validate_field, validate_step, FieldError, FormValidationErrors};

/// Lifetime of one quote form session.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteState {
    pub data: QuoteFormData,
    pub errors: FormValidationErrors,
    pub step: FormStep,
    pub touched: BTreeSet<QuoteField>,
    pub submitted: Option<MailtoLink>,
}

impl Default for QuoteState {
    fn default() -> Self {
        Self {
            data: QuoteFormData::default(),
            errors: FormValidationErrors::default(),
            step: FormStep::Contact,
            touched: BTreeSet::new(),
            submitted: None,
        }
    }
}

pub enum QuoteAction {
    Update(QuoteField, String),
    SetRecurring(bool),
    SetPrivacyAccepted(bool),
    Blur(QuoteField),
    Next,
    Back,
    GoTo(FormStep),
    Submit(Language),
    Reset,
}

impl QuoteState {
    /// Error to display for a field: only after the visitor left it or tried to move on.
    pub fn visible_error(&self, field: QuoteField) -> Option<&FieldError> {
        if self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn can_visit(&self, step: FormStep) -> bool {
        step <= self.step
    }

    fn revalidate(&mut self, field: QuoteField) {
        let error = validate_field(field, &self.data);
        self.errors.set(field, error);
    }

    /// The delivery address check compares all pickup and delivery parts.
    fn recheck_delivery(&mut self, changed: QuoteField) {
        if changed.step() == FormStep::Route
            && changed != QuoteField::DeliveryAddress
            && self.touched.contains(&QuoteField::DeliveryAddress)
        {
            self.revalidate(QuoteField::DeliveryAddress);
        }
    }

    fn touch_step(&mut self, step: FormStep) {
        self.touched.extend(step.fields());
    }
}

impl Reducible for QuoteState {
    type Action = QuoteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            QuoteAction::Update(field, value) => {
                next.data.set_text(field, value);
                if next.touched.contains(&field) {
                    next.revalidate(field);
                }
                next.recheck_delivery(field);
            }
            QuoteAction::SetRecurring(recurring) => next.data.recurring = recurring,
            QuoteAction::SetPrivacyAccepted(accepted) => {
                next.data.privacy_accepted = accepted;
                next.touched.insert(QuoteField::PrivacyAccepted);
                next.revalidate(QuoteField::PrivacyAccepted);
            }
            QuoteAction::Blur(field) => {
                next.touched.insert(field);
                next.revalidate(field);
                next.recheck_delivery(field);
            }
            QuoteAction::Next => {
                let step_errors = validate_step(next.step, &next.data);
                next.touch_step(next.step);
                for field in next.step.fields() {
                    next.errors.set(field, step_errors.get(field).copied());
                }
                if step_errors.is_empty() {
                    if let Some(step) = next.step.next() {
                        next.step = step;
                    }
                }
            }
            QuoteAction::Back => {
                if let Some(step) = next.step.previous() {
                    next.step = step;
                }
            }
            QuoteAction::GoTo(step) => {
                if next.can_visit(step) {
                    next.step = step;
                }
            }
            QuoteAction::Submit(lang) => {
                next.touched.extend(QuoteField::ALL);
                next.errors = validate(&next.data);
                match next.errors.first_field() {
                    Some(field) => {
                        next.step = field.step();
                        next.submitted = None;
                    }
                    None => next.submitted = Some(build_mailto(&next.data, lang)),
                }
            }
            QuoteAction::Reset => next = QuoteState::default(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::form::Timeframe;

    fn apply(state: Rc<QuoteState>, actions: Vec<QuoteAction>) -> Rc<QuoteState> {
        actions.into_iter().fold(state, |state, action| state.reduce(action))
    }

    fn fill_contact() -> Vec<QuoteAction> {
        vec![
            QuoteAction::Update(QuoteField::CompanyName, "Vogt Antriebstechnik GmbH".into()),
            QuoteAction::Update(QuoteField::ContactPerson, "Petra Vogt".into()),
            QuoteAction::Update(QuoteField::Email, "p.vogt@vogt-antriebe.de".into()),
            QuoteAction::Update(QuoteField::Phone, "+49 731 998877".into()),
        ]
    }

    fn fill_rest() -> Vec<QuoteAction> {
        vec![
            QuoteAction::Update(QuoteField::PickupAddress, "Blaubeurer Straße 40".into()),
            QuoteAction::Update(QuoteField::PickupPostalCode, "89077".into()),
            QuoteAction::Update(QuoteField::PickupCity, "Ulm".into()),
            QuoteAction::Update(QuoteField::DeliveryAddress, "Industriezeile 12".into()),
            QuoteAction::Update(QuoteField::DeliveryPostalCode, "4020".into()),
            QuoteAction::Update(QuoteField::DeliveryCity, "Linz".into()),
            QuoteAction::Update(QuoteField::GoodsDescription, "Getriebe, 1 Kiste".into()),
            QuoteAction::Update(QuoteField::WeightKg, "640".into()),
            QuoteAction::Update(QuoteField::Timeframe, Timeframe::Express.value().into()),
            QuoteAction::SetPrivacyAccepted(true),
        ]
    }

    #[test]
    fn errors_stay_hidden_until_blur() {
        let state = Rc::new(QuoteState::default()).reduce(QuoteAction::Update(QuoteField::Email, "nope".into()));
        assert_eq!(state.visible_error(QuoteField::Email), None);
        let state = state.reduce(QuoteAction::Blur(QuoteField::Email));
        assert_eq!(state.visible_error(QuoteField::Email), Some(&FieldError::InvalidEmail));
        let state = state.reduce(QuoteAction::Update(QuoteField::Email, "a@b.de".into()));
        assert_eq!(state.visible_error(QuoteField::Email), None);
    }

    #[test]
    fn next_blocks_on_invalid_step() {
        let state = Rc::new(QuoteState::default()).reduce(QuoteAction::Next);
        assert_eq!(state.step, FormStep::Contact);
        assert_eq!(state.visible_error(QuoteField::CompanyName), Some(&FieldError::Required));
        // later steps are not validated yet
        assert_eq!(state.errors.get(QuoteField::WeightKg), None);
    }

    #[test]
    fn next_advances_when_step_is_valid() {
        let mut actions = fill_contact();
        actions.push(QuoteAction::Next);
        let state = apply(Rc::new(QuoteState::default()), actions);
        assert_eq!(state.step, FormStep::Route);
        assert!(state.errors.is_empty());
        assert!(state.can_visit(FormStep::Contact));
        assert!(!state.can_visit(FormStep::Cargo));
    }

    #[test]
    fn goto_cannot_skip_ahead() {
        let state = Rc::new(QuoteState::default()).reduce(QuoteAction::GoTo(FormStep::Schedule));
        assert_eq!(state.step, FormStep::Contact);
    }

    #[test]
    fn submit_jumps_to_first_invalid_step() {
        let mut actions = fill_contact();
        actions.extend([QuoteAction::Next, QuoteAction::Next]);
        actions.push(QuoteAction::Submit(Language::De));
        let state = apply(Rc::new(QuoteState::default()), actions);
        assert_eq!(state.step, FormStep::Route);
        assert!(state.submitted.is_none());
        assert!(state.visible_error(QuoteField::WeightKg).is_some());
    }

    #[test]
    fn valid_submit_produces_mailto() {
        let mut actions = fill_contact();
        actions.extend(fill_rest());
        actions.push(QuoteAction::Submit(Language::En));
        let state = apply(Rc::new(QuoteState::default()), actions);
        let link = state.submitted.as_ref().expect("mailto link");
        assert!(link.url.starts_with("mailto:"));
        assert!(link.is_valid);
    }

    #[test]
    fn reset_clears_everything() {
        let mut actions = fill_contact();
        actions.extend(fill_rest());
        actions.push(QuoteAction::Submit(Language::De));
        actions.push(QuoteAction::Reset);
        let state = apply(Rc::new(QuoteState::default()), actions);
        assert_eq!(*state, QuoteState::default());
    }

    #[test]
    fn editing_pickup_rechecks_delivery() {
        let mut actions = fill_rest();
        actions.push(QuoteAction::Blur(QuoteField::DeliveryAddress));
        actions.extend([
            QuoteAction::Update(QuoteField::DeliveryAddress, "Blaubeurer Straße 40".into()),
            QuoteAction::Update(QuoteField::DeliveryPostalCode, "89077".into()),
            QuoteAction::Update(QuoteField::DeliveryCity, "Ulm".into()),
        ]);
        let state = apply(Rc::new(QuoteState::default()), actions);
        assert_eq!(state.visible_error(QuoteField::DeliveryAddress), Some(&FieldError::SameAsPickup));

        let state = state.reduce(QuoteAction::Update(QuoteField::PickupCity, "Neu-Ulm".into()));
        assert_eq!(state.visible_error(QuoteField::DeliveryAddress), None);
    }
}
