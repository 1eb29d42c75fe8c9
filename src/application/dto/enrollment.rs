//! Worker onboarding form state and validation.

use crate::domain::ports::{EnrollmentSubmission, MediaRef};

/// Working state of the onboarding form. Fields stay optional while
/// the user fills them; [`EnrollmentForm::validate`] turns a complete
/// form into a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentForm {
    pub full_name: String,
    pub skill: String,
    pub experience_years: Option<u32>,
    pub profile_photo: Option<MediaRef>,
    pub id_front: Option<MediaRef>,
    pub id_back: Option<MediaRef>,
    pub bank_proof: Option<MediaRef>,
}

impl EnrollmentForm {
    /// Returns the field labels still missing, empty when complete.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.profile_photo.is_none() {
            missing.push("profile photo");
        }
        if self.id_front.is_none() {
            missing.push("ID front");
        }
        if self.id_back.is_none() {
            missing.push("ID back");
        }
        if self.bank_proof.is_none() {
            missing.push("bank proof");
        }
        if self.full_name.trim().is_empty() {
            missing.push("full name");
        }
        if self.skill.trim().is_empty() {
            missing.push("skill");
        }
        missing
    }

    /// Converts a complete form into a submission.
    ///
    /// # Errors
    /// Returns the missing field labels if any required field is unset.
    pub fn validate(&self) -> Result<EnrollmentSubmission, Vec<&'static str>> {
        let missing = self.missing_fields();

        match (
            &self.profile_photo,
            &self.id_front,
            &self.id_back,
            &self.bank_proof,
        ) {
            (Some(profile_photo), Some(id_front), Some(id_back), Some(bank_proof))
                if missing.is_empty() =>
            {
                Ok(EnrollmentSubmission {
                    full_name: self.full_name.trim().to_string(),
                    skill: self.skill.clone(),
                    experience_years: self.experience_years.unwrap_or(0),
                    profile_photo: profile_photo.clone(),
                    id_front: id_front.clone(),
                    id_back: id_back.clone(),
                    bank_proof: bank_proof.clone(),
                })
            }
            _ => Err(missing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> EnrollmentForm {
        EnrollmentForm {
            full_name: "Raju Yadav".to_string(),
            skill: "mason".to_string(),
            experience_years: Some(5),
            profile_photo: Some(MediaRef::new("/tmp/photo.jpg")),
            id_front: Some(MediaRef::new("/tmp/front.jpg")),
            id_back: Some(MediaRef::new("/tmp/back.jpg")),
            bank_proof: Some(MediaRef::new("/tmp/bank.jpg")),
        }
    }

    #[test]
    fn test_empty_form_reports_all_required() {
        let missing = EnrollmentForm::default().missing_fields();
        assert_eq!(missing.len(), 6);
    }

    #[test]
    fn test_complete_form_validates() {
        let submission = complete_form().validate().unwrap();
        assert_eq!(submission.full_name, "Raju Yadav");
        assert_eq!(submission.experience_years, 5);
    }

    #[test]
    fn test_blank_name_is_missing() {
        let mut form = complete_form();
        form.full_name = "   ".to_string();
        assert_eq!(form.missing_fields(), vec!["full name"]);
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_experience_is_optional() {
        let mut form = complete_form();
        form.experience_years = None;
        let submission = form.validate().unwrap();
        assert_eq!(submission.experience_years, 0);
    }
}
