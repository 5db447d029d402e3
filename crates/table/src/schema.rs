//! The canonical registry schema.
//!
//! Every table exposes at least these eleven columns, in this order. Source
//! workbooks may carry extra columns; those are preserved but never searched
//! or edited.

/// Entity type (e.g. "Liceo", "Comune").
pub const ENTITY_TYPE: &str = "Entity Type";
/// Institution name; the informal lookup key for edit/delete/detail.
pub const INSTITUTE: &str = "Institute";
/// Total census population (free-form, not parsed numerically).
pub const CENSUS_TOTAL: &str = "Total Census Population";
/// Male census population.
pub const CENSUS_MALE: &str = "Male Census Population";
/// Female census population.
pub const CENSUS_FEMALE: &str = "Female Census Population";
/// Total resident population.
pub const RESIDENT_TOTAL: &str = "Total Resident Population";
/// Official web site.
pub const OFFICIAL_SITE: &str = "Official Site";
/// Personnel/competitions office email.
pub const EMAIL: &str = "Personnel/Competitions Office Email";
/// Personnel/competitions office phone.
pub const PHONE: &str = "Personnel/Competitions Office Phone";
/// Link to the competitions/personnel page.
pub const LINK: &str = "Competitions/Personnel Link";
/// Manager or secretary in charge.
pub const MANAGER: &str = "Manager/Secretary";

/// The fixed eleven-column schema, in canonical order.
pub const CANONICAL_COLUMNS: [&str; 11] = [
    ENTITY_TYPE,
    INSTITUTE,
    CENSUS_TOTAL,
    CENSUS_MALE,
    CENSUS_FEMALE,
    RESIDENT_TOTAL,
    OFFICIAL_SITE,
    EMAIL,
    PHONE,
    LINK,
    MANAGER,
];

/// Columns inspected by the consult view's free-text filter.
///
/// This is a deliberate scope limit: the other columns are displayed but
/// never searched.
pub const SEARCHED_COLUMNS: [&str; 4] = [ENTITY_TYPE, INSTITUTE, EMAIL, PHONE];

/// Columns a user can set through the editor forms.
pub const EDITABLE_COLUMNS: [&str; 6] = [INSTITUTE, OFFICIAL_SITE, EMAIL, PHONE, LINK, MANAGER];
