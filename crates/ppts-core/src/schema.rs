//! The fixed source schema of the permit extract
//!
//! Column names are hard-coded so that new columns added upstream cannot leak
//! into unrelated outputs. Reading fails when any column listed here is
//! absent; columns not listed here are ignored.

use std::fmt;

/// Version of the column list below; bump when the extract layout changes.
pub const SCHEMA_VERSION: u32 = 1;

/// Declared semantic type of a source column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Nullable string
    Text,
    /// Nullable number
    Number,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Number => write!(f, "number"),
        }
    }
}

/// A column the engine expects in the extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceColumn {
    pub name: String,
    pub kind: ColumnKind,
}

impl SourceColumn {
    fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Text,
        }
    }

    fn number(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Number,
        }
    }
}

// Record columns
pub const RECORD_ID: &str = "record_id";
pub const OBJECT_ID: &str = "OBJECTID";
pub const TEMPLATE_ID: &str = "templateid";
pub const RECORD_NAME: &str = "record_name";
pub const DESCRIPTION: &str = "description";
pub const RECORD_STATUS: &str = "record_status";
pub const CONSTRUCT_COST: &str = "constructcost";
pub const RELATED_BUILDING_PERMIT: &str = "RELATED_BUILDING_PERMIT";
pub const ACA_LINK: &str = "acalink";
pub const AA_LINK: &str = "aalink";
pub const DATE_OPENED: &str = "date_opened";
pub const DATE_CLOSED: &str = "date_closed";
pub const CHILDREN: &str = "children";

// Record type columns
pub const RECORD_TYPE_CATEGORY: &str = "record_type_category";
pub const RECORD_TYPE_NAME: &str = "record_type";
pub const RECORD_TYPE_TYPE: &str = "record_type_type";
pub const RECORD_TYPE_SUBTYPE: &str = "record_type_subtype";
pub const RECORD_TYPE_GROUP: &str = "record_type_group";
pub const MODULE: &str = "module";

// Location columns
pub const GEOMETRY: &str = "the_geom";
pub const SHAPE_LENGTH: &str = "Shape_Length";
pub const SHAPE_AREA: &str = "Shape_Area";
pub const ADDRESS: &str = "address";

// Planner columns
pub const PLANNER_ID: &str = "planner_id";
pub const PLANNER_NAME: &str = "planner_name";
pub const PLANNER_EMAIL: &str = "planner_email";
pub const PLANNER_PHONE: &str = "planner_phone";

/// Checkbox columns describing the project
pub const PRJ_DESC_FLAGS: &[&str] = &[
    "CHANGE_OF_USE",
    "ADDITIONS",
    "NEW_CONSTRUCTION",
    "LEG_ZONE_CHANGE",
    "DEMOLITION",
    "LOT_LINE_ADJUST",
    "FACADE_ALT",
    "ROW_IMPROVE",
    "OTHER_PRJ_DESC",
    "SPECIAL_NEEDS",
    "SENIOR",
    "AFFORDABLE_UNITS",
    "STUDENT",
    "INCLUSIONARY",
    "STATE_DENSITY_BONUS",
    "ADU",
    "FORMULA_RETAIL",
    "MCD",
    "TOBACCO",
    "FINANCIAL",
    "MASSAGE",
    "OTHER_NON_RES",
];

/// The demolition checkbox, which also takes the value "Yes"
pub const DEMOLITION: &str = "DEMOLITION";

/// Free-text project description columns that also produce detail rows
pub const PRJ_DESC_DETAILS: &[&str] = &["MCD_REFERRAL", "ENVIRONMENTAL_REVIEW_TYPE"];

/// Hearing event checkbox columns
pub const HEARING_COLUMNS: &[&str] = &[
    "BOS_1ST_READ",
    "BOS_2ND_READ",
    "COM_HEARING",
    "MAYORAL_SIGN",
    "TRANSMIT_DATE_BOS",
    "COM_HEARING_DATE_BOS",
];

pub const LAND_USE_PREFIX: &str = "LAND_USE";

pub const LAND_USE_CATEGORIES: &[&str] = &[
    "RC",
    "RESIDENTIAL",
    "CIE",
    "PDR",
    "OFFICE",
    "MEDICAL",
    "VISITOR",
    "PARKING_SPACES",
];

pub const PRJ_FEATURE_PREFIX: &str = "PRJ_FEATURE";

pub const PRJ_FEATURE_CATEGORIES: &[&str] = &[
    "AFFORDABLE",
    "HOTEL_ROOMS",
    "MARKET_RATE",
    "BUILD",
    "STORIES",
    "PARKING",
    "LOADING",
    "BIKE",
    "CAR_SHARE",
    "USABLE",
    "PUBLIC",
    "ART",
    "ROOF",
    "SOLAR",
    "LIVING",
];

/// Project feature category whose label comes from a free-text column
pub const PRJ_FEATURE_OTHER: &str = "OTHER";

/// Free-text name of the "other" project feature
pub const PRJ_FEATURE_OTHER_NAME: &str = "PRJ_FEATURE_OTHER";

/// Project features whose PROP column is derived from EXIST and NET
pub const PRJ_FEATURE_DERIVED_PROP: &[&str] = &["STORIES", "LOADING"];

pub const DWELLING_PREFIX: &str = "RESIDENTIAL";

pub const DWELLING_CATEGORIES: &[&str] = &[
    "STUDIO", "1BR", "2BR", "3BR", "GH_ROOMS", "GH_BEDS", "SRO", "MICRO",
];

/// Accessory dwelling unit categories, which also carry an AREA column
pub const ADU_CATEGORIES: &[&str] = &["ADU_STUDIO", "ADU_1BR", "ADU_2BR", "ADU_3BR"];

/// Suffix of one column in an EXIST/PROP/NET measurement group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Exist,
    Prop,
    Net,
    Area,
}

impl Measure {
    pub const TRIPLET: [Measure; 3] = [Measure::Exist, Measure::Prop, Measure::Net];

    pub fn suffix(self) -> &'static str {
        match self {
            Measure::Exist => "EXIST",
            Measure::Prop => "PROP",
            Measure::Net => "NET",
            Measure::Area => "AREA",
        }
    }
}

/// Name of a measurement column, e.g. `LAND_USE_OFFICE_EXIST`
pub fn measurement_column(prefix: &str, category: &str, measure: Measure) -> String {
    format!("{prefix}_{category}_{}", measure.suffix())
}

/// Every column the engine reads, in a stable order.
pub fn source_columns() -> Vec<SourceColumn> {
    let mut columns: Vec<SourceColumn> = [
        RECORD_ID,
        TEMPLATE_ID,
        RECORD_NAME,
        DESCRIPTION,
        RECORD_STATUS,
        RELATED_BUILDING_PERMIT,
        ACA_LINK,
        AA_LINK,
        DATE_OPENED,
        DATE_CLOSED,
        CHILDREN,
        RECORD_TYPE_CATEGORY,
        RECORD_TYPE_NAME,
        RECORD_TYPE_TYPE,
        RECORD_TYPE_SUBTYPE,
        RECORD_TYPE_GROUP,
        MODULE,
        GEOMETRY,
        ADDRESS,
        PLANNER_ID,
        PLANNER_NAME,
        PLANNER_EMAIL,
        PLANNER_PHONE,
        PRJ_FEATURE_OTHER_NAME,
    ]
    .into_iter()
    .map(SourceColumn::text)
    .collect();

    columns.extend(
        [OBJECT_ID, CONSTRUCT_COST, SHAPE_LENGTH, SHAPE_AREA]
            .into_iter()
            .map(SourceColumn::number),
    );

    columns.extend(
        PRJ_DESC_FLAGS
            .iter()
            .chain(PRJ_DESC_DETAILS)
            .chain(HEARING_COLUMNS)
            .map(|name| SourceColumn::text(*name)),
    );

    let triplets = LAND_USE_CATEGORIES
        .iter()
        .map(|c| (LAND_USE_PREFIX, *c))
        .chain(PRJ_FEATURE_CATEGORIES.iter().map(|c| (PRJ_FEATURE_PREFIX, *c)))
        .chain(std::iter::once((PRJ_FEATURE_PREFIX, PRJ_FEATURE_OTHER)))
        .chain(DWELLING_CATEGORIES.iter().map(|c| (DWELLING_PREFIX, *c)))
        .chain(ADU_CATEGORIES.iter().map(|c| (DWELLING_PREFIX, *c)));
    for (prefix, category) in triplets {
        columns.extend(
            Measure::TRIPLET
                .iter()
                .map(|m| SourceColumn::number(measurement_column(prefix, category, *m))),
        );
    }

    columns.extend(
        ADU_CATEGORIES
            .iter()
            .map(|c| SourceColumn::number(measurement_column(DWELLING_PREFIX, c, Measure::Area))),
    );

    columns
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
