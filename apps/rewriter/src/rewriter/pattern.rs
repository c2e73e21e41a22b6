//! Fixed inputs of the report-type layout migration.
//!
//! The old layout puts the Report Type and Time fields directly in an
//! `items-end` flex row. The new one nests them in an inner wrapper and adds an
//! empty `flex-1` sibling so the row splits like the enemy/friendly player
//! containers below it.

/// File rewritten in place, relative to the working directory.
pub const TARGET_PATH: &str = "client/src/components/BaseModal.tsx";

/// Old layout block. `(?s)` lets the lazy groups span lines; `\s*` absorbs any
/// indentation between tags. Group 1 is the Report Type payload, group 2 the Time payload.
pub const OLD_LAYOUT_PATTERN: &str = concat!(
    r#"(?s)      <div className="flex gap-4 items-end mb-4">\s*"#,
    r#"<div className="flex-1">\s*"#,
    r#"<label className="block text-sm font-medium mb-1 text-gray-200">Report Type</label>(.*?)</div>\s*"#,
    r#"<div>\s*"#,
    r#"<label className="block text-sm font-medium mb-1 text-gray-200">Time</label>(.*?)</div>\s*"#,
    r#"</div>"#,
);

/// Replacement for the old block. `${1}` and `${2}` carry the captured payloads.
pub const NEW_LAYOUT_TEMPLATE: &str = r#"      <div className="flex gap-3 mb-4">
        <div className="flex-1 flex gap-4 items-end">
          <div className="flex-1">
            <label className="block text-sm font-medium mb-1 text-gray-200">Report Type</label>${1}</div>
          <div>
            <label className="block text-sm font-medium mb-1 text-gray-200">Time</label>${2}</div>
        </div>
        <div className="flex-1">
          {/* Empty space to match friendly players width */}
        </div>
      </div>"#;
