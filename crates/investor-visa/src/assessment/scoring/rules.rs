use super::super::answers::AnswerMap;
use super::ScoreSheet;

pub(crate) const AGE_EXACT: &str = "age_exact";
pub(crate) const CAPITAL_AMOUNT: &str = "capital_amount";
pub(crate) const EXPERIENCE_TYPE: &str = "experience_type";
pub(crate) const EXPERIENCE_YEARS: &str = "experience_years";
pub(crate) const ENGLISH_METHOD: &str = "english_method";
pub(crate) const ENGLISH_TEST_DATE: &str = "english_test_date";
pub(crate) const BUSINESS_IDENTIFIED: &str = "business_identified";
pub(crate) const BUSINESS_SECTOR: &str = "business_sector";
pub(crate) const BUSINESS_EMPLOYEES: &str = "business_employees";
pub(crate) const BUSINESS_YEARS: &str = "business_years";
pub(crate) const BUSINESS_PRICE: &str = "business_price";
pub(crate) const BUSINESS_FRANCHISE: &str = "business_franchise";
pub(crate) const FUNDS_LOCATION: &str = "funds_location";
pub(crate) const FUNDS_NZ_OVER_TWO_YEARS: &str = "funds_nz_duration_over_2_years";
pub(crate) const BANKRUPTCY_DETAILS: &str = "bankruptcy_details";
pub(crate) const CRIMINAL_RECORD: &str = "criminal_record";
pub(crate) const IMMIGRATION_BREACHES: &str = "immigration_breaches";
pub(crate) const TIMELINE: &str = "timeline";
pub(crate) const PROFESSIONAL_ADVICE: &str = "professional_advice";

pub(crate) const FAST_TRACK_CAPITAL: f64 = 2_000_000.0;
const LOW_CAPITAL: f64 = 1_500_000.0;
const MINIMUM_PRICE: f64 = 1_000_000.0;
const NEAR_MINIMUM_PRICE: f64 = 1_200_000.0;
const MINIMUM_EMPLOYEES: f64 = 5.0;
const COMFORTABLE_EMPLOYEES: f64 = 7.0;
const MINIMUM_OPERATING_YEARS: f64 = 5.0;
const COMFORTABLE_OPERATING_YEARS: f64 = 7.0;

pub(crate) const SELF_EMPLOYED: &str = "Self-employed (business owner)";
pub(crate) const SENIOR_MANAGEMENT: &str = "Senior management";
pub(crate) const IELTS: &str = "IELTS test (5.0 overall)";
pub(crate) const HIGH_RISK_SECTORS: [&str; 2] = ["Retail", "Hospitality/Food Service"];
pub(crate) const SUITABLE_SECTORS: [&str; 3] = [
    "Manufacturing",
    "Technology/IT Services",
    "Professional Services",
];
pub(crate) const FRANCHISE_CONFIRMED: &str = "Yes - franchise";
pub(crate) const FRANCHISE_UNSURE: &str = "Unsure - has some licensing/brand agreements";
pub(crate) const FUNDS_OFFSHORE_RECENT: &str = "Outside New Zealand (< 2 years)";
pub(crate) const FUNDS_IN_NZ: &str = "In New Zealand";
pub(crate) const URGENT_TIMELINES: [&str; 2] = ["Within 1 month", "1-3 months"];

pub(crate) type ScoringRule = fn(&AnswerMap, ScoreSheet) -> ScoreSheet;

/// Rule groups in evaluation order; feedback lists follow this order.
pub(crate) const RULES: &[ScoringRule] = &[
    age,
    capital,
    experience_type,
    experience_years,
    english,
    target_business,
    funds_location,
    bankruptcy,
    criminal_record,
    immigration_breaches,
    timeline,
    professional_advice,
];

/// Sub-rules applied only once a target business has been identified.
const BUSINESS_RULES: &[ScoringRule] = &[
    business_sector,
    business_headcount,
    business_history,
    business_price,
    business_franchise,
];

pub(crate) fn age(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    let age = answers.number_or(AGE_EXACT, 0.0);
    if age <= 45.0 {
        return sheet.strength("Young applicant (more time to operate business)");
    }
    if age <= 50.0 {
        return sheet;
    }

    let sheet = sheet.adjust(-5);
    if age > 53.0 {
        sheet
            .adjust(-10)
            .concern("Age close to maximum limit (55)")
            .recommend("Apply as soon as possible before reaching age limit")
    } else {
        sheet
    }
}

pub(crate) fn capital(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    let capital = answers.number_or(CAPITAL_AMOUNT, 0.0);
    if capital >= FAST_TRACK_CAPITAL {
        sheet.strength("Qualifies for fast-track pathway (12 months to residence)")
    } else if capital < LOW_CAPITAL {
        sheet
            .adjust(-5)
            .concern("Capital amount close to minimum requirement")
            .recommend("Consider increasing investment to $2M for faster pathway")
    } else {
        sheet
    }
}

pub(crate) fn experience_type(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    match answers.text(EXPERIENCE_TYPE) {
        Some(SELF_EMPLOYED) => {
            sheet.strength("Self-employment experience (strong evidence profile)")
        }
        Some(SENIOR_MANAGEMENT) => sheet
            .adjust(-10)
            .concern("Senior management experience (more complex to evidence)")
            .recommend(
                "Prepare detailed evidence: org charts, job descriptions, authority documentation",
            ),
        _ => sheet,
    }
}

pub(crate) fn experience_years(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    let years = answers.number_or(EXPERIENCE_YEARS, 0.0);
    if years >= 5.0 {
        sheet.strength(format!(
            "{years} years business experience (exceeds minimum)"
        ))
    } else if years == 3.0 {
        sheet.concern("Minimum business experience (3 years)")
    } else {
        sheet
    }
}

pub(crate) fn english(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    let method_pending =
        !answers.flag(ENGLISH_METHOD) || answers.text(ENGLISH_METHOD) == Some(IELTS);
    if method_pending && !answers.flag(ENGLISH_TEST_DATE) {
        sheet
            .adjust(-15)
            .concern("English test not yet taken")
            .recommend("Book IELTS test immediately (must be in-person, results valid 2 years)")
    } else {
        sheet
    }
}

pub(crate) fn target_business(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    if answers.flag(BUSINESS_IDENTIFIED) {
        return BUSINESS_RULES
            .iter()
            .fold(sheet, |sheet, rule| rule(answers, sheet));
    }

    sheet
        .concern("No business identified yet")
        .recommend(
            "Begin business search in suitable sectors: manufacturing, professional services, technology",
        )
        .recommend(
            "Avoid: franchises, fast food, convenience stores, labour hire, residential-based businesses",
        )
}

pub(crate) fn business_sector(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    let Some(sector) = answers.text(BUSINESS_SECTOR) else {
        return sheet;
    };

    if HIGH_RISK_SECTORS.contains(&sector) {
        sheet
            .adjust(-15)
            .concern("High-risk sector (retail/hospitality) - higher compliance scrutiny")
            .recommend("Ensure impeccable employment and tax compliance records")
    } else if SUITABLE_SECTORS.contains(&sector) {
        sheet.strength("Suitable business sector for visa category")
    } else {
        sheet
    }
}

pub(crate) fn business_headcount(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    let employees = answers.number_or(BUSINESS_EMPLOYEES, 0.0);
    if employees < MINIMUM_EMPLOYEES {
        sheet
            .adjust(-20)
            .concern("Business has fewer than 5 employees (does not meet requirement)")
            .recommend("Find business with at least 5 full-time employees")
    } else if employees < COMFORTABLE_EMPLOYEES {
        sheet
            .adjust(-10)
            .concern("Employee count close to minimum (5 FTE required)")
    } else {
        sheet.strength(format!(
            "Business has {employees} employees (exceeds minimum)"
        ))
    }
}

pub(crate) fn business_history(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    let years = answers.number_or(BUSINESS_YEARS, 0.0);
    if years < MINIMUM_OPERATING_YEARS {
        sheet
            .adjust(-20)
            .concern("Business operating less than 5 years (does not meet requirement)")
            .recommend("Find business that has operated for 5+ years continuously")
    } else if years < COMFORTABLE_OPERATING_YEARS {
        sheet
            .adjust(-10)
            .concern("Business operating history close to minimum")
    } else {
        sheet.strength(format!(
            "{years} years operating history (exceeds minimum)"
        ))
    }
}

pub(crate) fn business_price(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    let price = answers.number_or(BUSINESS_PRICE, 0.0);
    if price < MINIMUM_PRICE {
        sheet
            .adjust(-20)
            .concern("Purchase price below $1M minimum requirement")
    } else if price < NEAR_MINIMUM_PRICE {
        sheet.adjust(-5).concern("Purchase price close to minimum")
    } else {
        sheet
    }
}

pub(crate) fn business_franchise(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    match answers.text(BUSINESS_FRANCHISE) {
        Some(FRANCHISE_CONFIRMED) => sheet
            .adjust(-50)
            .concern(
                "⚠️ CRITICAL: Business is a franchise (EXCLUDED - application will be declined)",
            )
            .recommend("Find non-franchise business immediately"),
        Some(FRANCHISE_UNSURE) => sheet
            .adjust(-25)
            .concern("⚠️ Possible franchise indicators (high risk of exclusion)")
            .recommend("Obtain legal opinion on whether business meets franchise definition")
            .recommend(
                "Review all agreements for: ongoing fees, brand licensing, operational control by third party",
            ),
        _ => sheet,
    }
}

pub(crate) fn funds_location(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    match answers.text(FUNDS_LOCATION) {
        Some(FUNDS_OFFSHORE_RECENT) => sheet
            .concern("Funds outside NZ require detailed tracing documentation")
            .recommend("Prepare: bank statements, source documentation, transfer records"),
        Some(FUNDS_IN_NZ) if answers.flag(FUNDS_NZ_OVER_TWO_YEARS) => {
            sheet.strength("Funds already in NZ (simplified verification)")
        }
        Some(FUNDS_IN_NZ) => {
            sheet.concern("Ensure funds in NZ bank and prepare transfer documentation")
        }
        _ => sheet,
    }
}

pub(crate) fn bankruptcy(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    if !answers.flag(BANKRUPTCY_DETAILS) {
        return sheet;
    }

    sheet
        .adjust(-100)
        .concern("⚠️ CRITICAL: Bankruptcy/business failure in last 5 years (INELIGIBLE)")
}

pub(crate) fn criminal_record(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    if !answers.flag(CRIMINAL_RECORD) {
        return sheet;
    }

    sheet
        .adjust(-50)
        .concern("⚠️ Criminal record (requires detailed assessment)")
        .recommend("Obtain police certificates and legal opinion on character requirements")
}

pub(crate) fn immigration_breaches(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    if !answers.flag(IMMIGRATION_BREACHES) {
        return sheet;
    }

    sheet
        .adjust(-30)
        .concern("⚠️ Immigration breaches/refusals (affects character assessment)")
        .recommend(
            "Disclose all immigration history fully - non-disclosure is grounds for decline",
        )
}

pub(crate) fn timeline(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    let urgent = answers
        .text(TIMELINE)
        .map(|timeline| URGENT_TIMELINES.contains(&timeline))
        .unwrap_or(false);

    if urgent && !answers.flag(BUSINESS_IDENTIFIED) {
        sheet
            .concern("Tight timeline without business identified")
            .recommend("Realistic timeline: 3-6 months for business search + due diligence")
    } else {
        sheet
    }
}

pub(crate) fn professional_advice(answers: &AnswerMap, sheet: ScoreSheet) -> ScoreSheet {
    if answers.flag(PROFESSIONAL_ADVICE) {
        sheet
    } else {
        sheet.recommend("Obtain professional immigration and legal advice before proceeding")
    }
}
