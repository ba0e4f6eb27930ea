use studio_core::auth::EditCapability;
use studio_core::domain::{ServiceCategory, ServiceDraft};
use studio_core::editable::{ServiceColumns, ServiceEditor};
use studio_core::storage::{MemoryBackend, SiteBackend};

fn columns_from(backend: &MemoryBackend) -> ServiceColumns {
    ServiceColumns::partition(backend.read_services().unwrap())
}

#[test]
fn saved_edit_replaces_exactly_one_column_entry() {
    let backend = MemoryBackend::with_demo_data();
    let mut columns = columns_from(&backend);
    let before_studio: Vec<String> = columns.studio().iter().map(|r| r.id.clone()).collect();

    let target = columns.find("doterra-session").unwrap().clone();
    let mut editor = ServiceEditor::new(target, EditCapability::granted());
    editor.begin_edit();
    let mut draft = editor.draft().clone();
    draft.price = 95.0;
    editor.change(draft);

    let updated = editor.save(&backend).expect("save succeeds");
    assert!(columns.apply_update(updated));

    let after_studio: Vec<String> = columns.studio().iter().map(|r| r.id.clone()).collect();
    assert_eq!(before_studio, after_studio, "order and membership preserved");
    assert_eq!(columns.find("doterra-session").unwrap().price, 95.0);
    // Siblings untouched.
    assert_eq!(columns.find("stickwork-session").unwrap().price, 100.0);
    assert_eq!(columns.nature().len(), 1);
}

#[test]
fn category_reassignment_moves_the_entry_between_columns() {
    let backend = MemoryBackend::with_demo_data();
    let mut columns = columns_from(&backend);
    assert_eq!(columns.studio().len(), 2);
    assert_eq!(columns.nature().len(), 1);

    let target = columns.find("stickwork-session").unwrap().clone();
    let mut editor = ServiceEditor::new(target, EditCapability::granted());
    editor.begin_edit();
    let mut draft = editor.draft().clone();
    draft.category = ServiceCategory::Nature;
    editor.change(draft);

    let updated = editor.save(&backend).expect("save succeeds");
    assert!(columns.apply_update(updated));

    assert_eq!(columns.studio().len(), 1);
    assert_eq!(columns.nature().len(), 2);
    assert_eq!(
        columns.nature().last().unwrap().id,
        "stickwork-session",
        "moved entry joins the end of its new bucket"
    );
}

#[test]
fn created_service_joins_its_column() {
    let backend = MemoryBackend::with_demo_data();
    let mut columns = columns_from(&backend);

    let id = backend
        .create_service(ServiceDraft {
            category: ServiceCategory::Nature,
            title: "Riverside Meditation".into(),
            description: "Guided stillness by the water.".into(),
            price: 60.0,
            duration_minutes: 90,
            detail_text: String::new(),
            is_active: true,
        })
        .expect("create succeeds");

    let record = backend
        .all_services()
        .unwrap()
        .into_iter()
        .find(|record| record.id == id)
        .unwrap();
    columns.insert(record);

    assert_eq!(id, "riverside-meditation");
    assert_eq!(columns.nature().last().unwrap().id, id);
}

#[test]
fn viewer_cannot_open_a_service_editor() {
    let backend = MemoryBackend::with_demo_data();
    let record = backend.read_services().unwrap().remove(0);
    let mut editor = ServiceEditor::new(record, EditCapability::viewer());
    assert!(!editor.begin_edit());
    assert!(editor.save(&backend).is_none());
}

#[test]
fn inactive_services_leave_public_views_but_not_admin() {
    let backend = MemoryBackend::with_demo_data();
    let record = backend.read_services().unwrap().remove(0);

    let mut editor = ServiceEditor::new(record.clone(), EditCapability::granted());
    editor.begin_edit();
    let mut draft = editor.draft().clone();
    draft.is_active = false;
    editor.change(draft);
    editor.save(&backend).expect("save succeeds");

    assert!(backend
        .read_services()
        .unwrap()
        .iter()
        .all(|s| s.id != record.id));
    assert!(backend
        .all_services()
        .unwrap()
        .iter()
        .any(|s| s.id == record.id));
    assert!(backend
        .bookable_services()
        .unwrap()
        .iter()
        .all(|s| s.id != record.id));
}
