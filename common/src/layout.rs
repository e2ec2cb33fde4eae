//! Sheet column layout
//!
//! Header names of the vessel report and of the output workbook, with the
//! output column widths.

pub const ETA: &str = "ETA";
pub const VESSEL_NAME: &str = "Vessel Name";
pub const VESSEL_TYPE: &str = "Vessel Type";
pub const VESSEL_IMO: &str = "Vessel IMO";
pub const OPERATOR: &str = "Operator";
pub const GROUP_OWNER: &str = "Group Owner";
pub const REGISTERED_OWNER: &str = "Registered Owner";
pub const LAST_BUNKERING_START_DATE: &str = "Last Bunkering Start Date";
pub const LAST_BUNKERING_LOCATION: &str = "Last Bunkering Location";
pub const SALESPERSON_CODE: &str = "Salesperson Code";

/// Columns the vessel report must contain, in output order.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    ETA,
    VESSEL_NAME,
    VESSEL_TYPE,
    VESSEL_IMO,
    OPERATOR,
    GROUP_OWNER,
    REGISTERED_OWNER,
    LAST_BUNKERING_START_DATE,
    LAST_BUNKERING_LOCATION,
];

/// Output column definition
#[derive(Debug, Clone, Copy)]
pub struct OutputColumn {
    pub header: &'static str,
    /// Excel character width
    pub width: f64,
}

pub const OUTPUT_COLUMNS: [OutputColumn; 10] = [
    OutputColumn { header: ETA, width: 10.0 },
    OutputColumn { header: VESSEL_NAME, width: 24.0 },
    OutputColumn { header: VESSEL_TYPE, width: 26.0 },
    OutputColumn { header: VESSEL_IMO, width: 12.0 },
    OutputColumn { header: OPERATOR, width: 32.0 },
    OutputColumn { header: GROUP_OWNER, width: 28.0 },
    OutputColumn { header: REGISTERED_OWNER, width: 28.0 },
    OutputColumn { header: LAST_BUNKERING_START_DATE, width: 14.0 },
    OutputColumn { header: LAST_BUNKERING_LOCATION, width: 22.0 },
    OutputColumn { header: SALESPERSON_CODE, width: 16.0 },
];
