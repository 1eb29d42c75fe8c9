//! Static translation lookup.
//!
//! Lookup order: selected language, then English, then the raw key.
//! Missing entries are expected — the non-English tables are partial
//! and grow with the product.

use crate::domain::Language;

type Table = &'static [(&'static str, &'static str)];

const EN: Table = &[
    ("about", "About"),
    ("accept", "Accept"),
    ("app_name", "Mistri"),
    ("arriving_in", "Arriving in"),
    ("back_home", "Back to home"),
    ("bank_passbook", "Bank passbook / cheque"),
    ("book_now", "Book Now"),
    ("booking_confirmed", "Booking Confirmed!"),
    ("booking_msg", "will reach your location at the selected time."),
    ("cancel_booking", "Cancel booking"),
    ("change_number", "Change number"),
    ("chat", "Chat"),
    ("choose_role", "How do you want to use the app?"),
    ("complete_profile", "Complete your profile"),
    ("continue", "Continue"),
    ("edit_profile", "Edit profile"),
    ("enter_code_sent", "Enter the 4-digit code sent to"),
    ("est_hours", "est. 3 hrs"),
    ("experience", "Experience"),
    ("find_jobs", "Find work near you, get paid daily"),
    ("full_name", "Full name"),
    ("get_otp", "Get OTP"),
    ("hello", "Hello"),
    ("help_support", "Help & support"),
    ("hire_masons", "Hire masons, electricians & more"),
    ("history", "History"),
    ("hr", "hr"),
    ("i_am_worker", "I am a worker"),
    ("i_need_workers", "I need workers"),
    ("id_back", "ID card (back)"),
    ("id_front", "ID card (front)"),
    ("job_desc_label", "Describe the work"),
    ("job_desc_placeholder", "e.g. repair kitchen wall plaster"),
    ("job_done", "Job completed!"),
    ("jobs_completed", "Jobs done"),
    ("language", "Language"),
    ("logout", "Logout"),
    ("login_customer_desc", "Log in to book trusted workers near you."),
    ("login_worker_desc", "Log in to find work and get paid daily."),
    ("mark_completed", "Mark as completed"),
    ("nav_active", "Active"),
    ("nav_earnings", "Earnings"),
    ("nav_home", "Home"),
    ("nav_jobs", "Jobs"),
    ("nav_profile", "Profile"),
    ("nav_track", "Track"),
    ("nav_wallet", "Wallet"),
    ("new_job_requests", "New job requests"),
    ("not_found", "View not found"),
    ("offline", "Offline"),
    ("online", "Online"),
    ("order_summary", "Order summary"),
    ("otp_desc", "Share this code with the worker to start the job"),
    ("otp_for_start", "OTP to start job"),
    ("pay", "Pay"),
    ("payment_credit_msg", "will be credited to your wallet."),
    ("payment_method", "Payment method"),
    ("personal_details", "Personal details"),
    ("profile_photo", "Profile photo"),
    ("recent_transactions", "Recent transactions"),
    ("reject", "Reject"),
    ("saved_addresses", "Saved addresses"),
    ("search_placeholder", "Search mason, electrician..."),
    ("secure_login", "Your number is only used for login"),
    ("select_date", "Select date"),
    ("select_skill", "Primary skill"),
    ("select_time", "Select time"),
    ("service_fee", "Service fee"),
    ("settings", "Settings"),
    ("share_status", "Share status"),
    ("start_job", "Start job"),
    ("start_otp_label", "Ask the customer for the start OTP"),
    ("started_at", "Started at"),
    ("status_on_way", "Your worker is on the way"),
    ("status_reached", "Worker has arrived"),
    ("status_started", "Work in progress"),
    ("submit_verification", "Submit for verification"),
    ("tagline_customer", "Trusted workers for every job, right at your doorstep"),
    ("todays_earnings", "Today's earnings"),
    ("todays_schedule", "Today's schedule"),
    ("top_up", "Top up"),
    ("total", "Total"),
    ("total_balance", "Total balance"),
    ("track_status", "Track status"),
    ("upload_documents", "Upload documents"),
    ("upload_photo", "Upload photo"),
    ("verified", "Verified"),
    ("verify_login", "Verify & login"),
    ("verify_number", "Verify your number"),
    ("verification_desc", "We will verify your documents within 24 hours."),
    ("verification_pending", "Verification pending"),
    ("view_all", "View all"),
    ("visiting_charge", "Visiting charge"),
    ("whats_number", "What's your number?"),
    ("withdraw", "Withdraw"),
    ("work_in_progress", "Work in progress"),
    ("yrs_exp", "yrs"),
    // Category names
    ("architect", "Architect"),
    ("carpenter", "Carpenter"),
    ("civil_eng", "Civil Eng."),
    ("driver_heavy", "Heavy Driver"),
    ("electrician", "Electrician"),
    ("fitter", "Fitter"),
    ("gardener", "Gardener"),
    ("helper", "Factory Helper"),
    ("interior", "Interior Des."),
    ("labour", "Labour"),
    ("mason", "Mason"),
    ("operator", "Machine Op."),
    ("painter", "Painter"),
    ("plumber", "Plumber"),
    ("waterproofing", "Waterproof"),
    ("welder", "Welder"),
];

const HI: Table = &[
    ("about", "जानकारी"),
    ("accept", "स्वीकार करें"),
    ("arriving_in", "पहुंच रहे हैं"),
    ("back_home", "होम पर वापस"),
    ("book_now", "अभी बुक करें"),
    ("booking_confirmed", "बुकिंग पक्की!"),
    ("change_number", "नंबर बदलें"),
    ("chat", "चैट"),
    ("choose_role", "आप ऐप कैसे इस्तेमाल करना चाहते हैं?"),
    ("continue", "आगे बढ़ें"),
    ("enter_code_sent", "भेजा गया 4 अंकों का कोड डालें"),
    ("find_jobs", "पास में काम ढूंढें, रोज़ पैसा पाएं"),
    ("full_name", "पूरा नाम"),
    ("get_otp", "OTP पाएं"),
    ("hello", "नमस्ते"),
    ("hire_masons", "मिस्त्री, बिजली वाले और भी बुलाएं"),
    ("hr", "घंटा"),
    ("i_am_worker", "मैं मज़दूर हूँ"),
    ("i_need_workers", "मुझे मज़दूर चाहिए"),
    ("jobs_completed", "काम पूरे"),
    ("logout", "लॉग आउट"),
    ("mark_completed", "काम पूरा करें"),
    ("nav_active", "चालू"),
    ("nav_earnings", "कमाई"),
    ("nav_home", "होम"),
    ("nav_jobs", "काम"),
    ("nav_profile", "प्रोफ़ाइल"),
    ("nav_track", "ट्रैक"),
    ("nav_wallet", "वॉलेट"),
    ("new_job_requests", "नए काम के अनुरोध"),
    ("online", "ऑनलाइन"),
    ("offline", "ऑफ़लाइन"),
    ("pay", "भुगतान करें"),
    ("reject", "मना करें"),
    ("search_placeholder", "मिस्त्री, बिजली वाला खोजें..."),
    ("select_date", "तारीख चुनें"),
    ("select_time", "समय चुनें"),
    ("start_job", "काम शुरू करें"),
    ("todays_earnings", "आज की कमाई"),
    ("top_up", "पैसे डालें"),
    ("total", "कुल"),
    ("total_balance", "कुल बैलेंस"),
    ("track_status", "स्थिति देखें"),
    ("verified", "सत्यापित"),
    ("verify_login", "सत्यापित कर लॉगिन करें"),
    ("whats_number", "आपका नंबर क्या है?"),
    ("withdraw", "निकालें"),
    ("carpenter", "बढ़ई"),
    ("electrician", "बिजली मिस्त्री"),
    ("labour", "मज़दूर"),
    ("mason", "राजमिस्त्री"),
    ("painter", "पेंटर"),
    ("plumber", "प्लंबर"),
];

const MR: Table = &[
    ("book_now", "आता बुक करा"),
    ("continue", "पुढे चला"),
    ("get_otp", "OTP मिळवा"),
    ("hello", "नमस्कार"),
    ("i_am_worker", "मी कामगार आहे"),
    ("i_need_workers", "मला कामगार हवे आहेत"),
    ("nav_home", "होम"),
    ("nav_profile", "प्रोफाइल"),
    ("total", "एकूण"),
    ("whats_number", "तुमचा नंबर काय आहे?"),
];

const BN: Table = &[
    ("book_now", "এখনই বুক করুন"),
    ("continue", "এগিয়ে যান"),
    ("get_otp", "OTP নিন"),
    ("hello", "নমস্কার"),
    ("i_am_worker", "আমি একজন শ্রমিক"),
    ("i_need_workers", "আমার শ্রমিক দরকার"),
    ("whats_number", "আপনার নম্বর কী?"),
];

const TA: Table = &[
    ("book_now", "இப்போது பதிவு"),
    ("continue", "தொடரவும்"),
    ("get_otp", "OTP பெறுக"),
    ("hello", "வணக்கம்"),
    ("i_am_worker", "நான் தொழிலாளி"),
    ("i_need_workers", "எனக்கு தொழிலாளர்கள் வேண்டும்"),
    ("whats_number", "உங்கள் எண் என்ன?"),
];

const TE: Table = &[
    ("book_now", "ఇప్పుడే బుక్ చేయండి"),
    ("continue", "కొనసాగించండి"),
    ("hello", "నమస్కారం"),
];

const GU: Table = &[
    ("book_now", "હમણાં બુક કરો"),
    ("continue", "આગળ વધો"),
    ("hello", "નમસ્તે"),
];

const KN: Table = &[
    ("book_now", "ಈಗ ಬುಕ್ ಮಾಡಿ"),
    ("continue", "ಮುಂದುವರಿಸಿ"),
    ("hello", "ನಮಸ್ಕಾರ"),
];

const ML: Table = &[
    ("book_now", "ഇപ്പോൾ ബുക്ക് ചെയ്യുക"),
    ("continue", "തുടരുക"),
    ("hello", "നമസ്കാരം"),
];

const PA: Table = &[
    ("book_now", "ਹੁਣੇ ਬੁੱਕ ਕਰੋ"),
    ("continue", "ਜਾਰੀ ਰੱਖੋ"),
    ("hello", "ਸਤ ਸ੍ਰੀ ਅਕਾਲ"),
];

const fn table(language: Language) -> Table {
    match language {
        Language::En => EN,
        Language::Hi => HI,
        Language::Mr => MR,
        Language::Bn => BN,
        Language::Ta => TA,
        Language::Te => TE,
        Language::Gu => GU,
        Language::Kn => KN,
        Language::Ml => ML,
        Language::Pa => PA,
    }
}

fn lookup(table: Table, key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, value)| *value)
}

/// Resolves a display string: selected language, then English, then
/// the raw key.
#[must_use]
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    lookup(table(language), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

/// A translation handle bound to one language; what screens hold.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Looks up a display string.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_hit() {
        assert_eq!(translate(Language::Hi, "book_now"), "अभी बुक करें");
    }

    #[test]
    fn test_falls_back_to_english() {
        // No Telugu entry for "order_summary".
        assert_eq!(translate(Language::Te, "order_summary"), "Order summary");
    }

    #[test]
    fn test_falls_back_to_raw_key() {
        assert_eq!(translate(Language::En, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_translator_handle() {
        let t = Translator::new(Language::Hi);
        assert_eq!(t.t("nav_wallet"), "वॉलेट");
        assert_eq!(t.t("order_summary"), "Order summary");
    }

    #[test]
    fn test_every_partial_table_key_exists_in_english() {
        for table in [HI, MR, BN, TA, TE, GU, KN, ML, PA] {
            for (key, _) in table {
                assert!(
                    lookup(EN, key).is_some(),
                    "key {key} missing from English table"
                );
            }
        }
    }
}
