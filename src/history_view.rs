//! The built-in patch set: adds a History View to the generated
//! `CustomerList.jsx` customer-management component, next to the existing
//! Customer Details and Services views.
//!
//! All three edits are content-addressed. Earlier script generations used
//! fixed line indices (line 1261 and a scan around 1290) and broke whenever
//! upstream edits shifted the file; the substring anchors below survive that.

use crate::patch::{Anchor, Patch, PatchSet};

/// Broadens the details-view guard so the new flag hides it too.
/// `{!showServices ? (` gates a three-way conditional; History becomes the
/// middle branch, so Details must now require both flags to be off.
pub fn guard_patch() -> Patch {
    Patch {
        id: "history-guard".to_string(),
        anchor: Anchor::Substring {
            text: "{!showServices ? (".to_string(),
        },
        replacement: "{!showServices && !showHistory ? (".to_string(),
        // The buttons patch also writes `!showServices && !showHistory`, so
        // the sentinel must be the full guarded ternary opener.
        sentinel: "{!showServices && !showHistory ? (".to_string(),
    }
}

const BRANCH_ANCHOR: &str = r#"            ) : (
              // Services View
              <div className="services-list">"#;

const BRANCH_REPLACEMENT: &str = r#"            ) : showHistory ? (
              // History View
              <div className="history-list">
                {customerHistory.length > 0 ? (
                  <table className="history-table">
                    <thead>
                      <tr>
                        <th>Date</th>
                        <th>Message</th>
                      </tr>
                    </thead>
                    <tbody>
                      {customerHistory.map((entry, index) => (
                        <tr key={index}>
                          <td>{formatDateByCountry(entry.created_at, user.SettingsCountry || 'United Kingdom')}</td>
                          <td>{entry.Message}</td>
                        </tr>
                      ))}
                    </tbody>
                  </table>
                ) : (
                  <p>No history found for this customer.</p>
                )}
              </div>
            ) : (
              // Services View
              <div className="services-list">"#;

/// Inserts the History View branch between the Customer Details branch and
/// the Services branch. The insertion point is the text immediately
/// preceding the `// Services View` comment marker, not a line number.
/// Renders a date/message table over `customerHistory`, or a fallback
/// paragraph when the collection is empty; dates go through the component's
/// own `formatDateByCountry` helper.
pub fn branch_patch() -> Patch {
    Patch {
        id: "history-branch".to_string(),
        anchor: Anchor::Substring {
            text: BRANCH_ANCHOR.to_string(),
        },
        replacement: BRANCH_REPLACEMENT.to_string(),
        sentinel: "// History View".to_string(),
    }
}

const BUTTONS_ANCHOR: &str = r#"              ) : (
                <>
                  {!showServices && <button className="modal-edit-btn" onClick={() => { setIsEditingModal(true); setModalEditData({...selectedCustomer}); }}>Edit</button>}
                  <button className="modal-services-btn" onClick={() => { setShowServices(!showServices); if (!showServices) fetchCustomerServices(selectedCustomer.id); }}>{showServices ? 'Customer Details' : 'Services'}</button>
                </>
              )}"#;

const BUTTONS_REPLACEMENT: &str = r#"              ) : (
                <>
                  {!showServices && !showHistory && <button className="modal-edit-btn" onClick={() => { setIsEditingModal(true); setModalEditData({...selectedCustomer}); }}>Edit</button>}
                  <button className="modal-services-btn" onClick={() => { setShowServices(!showServices); setShowHistory(false); if (!showServices) fetchCustomerServices(selectedCustomer.id); }}>{showServices ? 'Customer Details' : 'Services'}</button>
                  <button className="modal-history-btn" onClick={() => { setShowHistory(!showHistory); setShowServices(false); if (!showHistory) fetchCustomerHistory(selectedCustomer.id); }}>{showHistory ? 'Customer Details' : 'History'}</button>
                </>
              )}"#;

/// Adds the History toggle to the modal action buttons. The two toggles are
/// mutually exclusive: switching one on clears the other, and history is
/// fetched lazily on first open.
pub fn buttons_patch() -> Patch {
    Patch {
        id: "history-toggle-button".to_string(),
        anchor: Anchor::Substring {
            text: BUTTONS_ANCHOR.to_string(),
        },
        replacement: BUTTONS_REPLACEMENT.to_string(),
        sentinel: "modal-history-btn".to_string(),
    }
}

pub fn patch_set() -> PatchSet {
    PatchSet {
        name: "history-view".to_string(),
        patches: vec![buttons_patch(), guard_patch(), branch_patch()],
    }
}
