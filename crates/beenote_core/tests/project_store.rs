use beenote_core::{Block, Project, ProjectStore};

fn project_with_blocks(title: &str, levels: &[u32]) -> Project {
    let mut project = Project::new(title);
    for &level in levels {
        project.boxes.push(Block::new(level));
    }
    project
}

#[test]
fn upsert_distinct_ids_prepends_newest_first() {
    let mut store = ProjectStore::new();
    let first = Project::new("first");
    let second = Project::new("second");
    let third = Project::new("third");

    store.upsert(first.clone());
    store.upsert(second.clone());
    store.upsert(third.clone());

    assert_eq!(store.len(), 3);
    assert_eq!(store.projects()[0].id, third.id);
    assert_eq!(store.projects()[1].id, second.id);
    assert_eq!(store.projects()[2].id, first.id);
}

#[test]
fn upsert_distinct_ids_matches_distinct_count() {
    let mut store = ProjectStore::new();
    let projects: Vec<Project> = (0..5).map(|i| Project::new(format!("p{i}"))).collect();

    // Each distinct id once, some of them twice.
    for project in &projects {
        store.upsert(project.clone());
    }
    for project in projects.iter().take(2) {
        store.upsert(project.clone());
    }

    assert_eq!(store.len(), projects.len());
    for project in &projects {
        assert!(store.get(&project.id).is_some());
    }
}

#[test]
fn upsert_existing_id_replaces_in_place_preserving_position() {
    let mut store = ProjectStore::new();
    let first = Project::new("first");
    let mut second = Project::new("second");
    store.upsert(first.clone());
    store.upsert(second.clone());

    second.title = "second, renamed".to_string();
    second.boxes.push(Block::new(0));
    store.upsert(second.clone());

    assert_eq!(store.len(), 2);
    assert_eq!(store.projects()[0].id, second.id);
    assert_eq!(store.projects()[0].title, "second, renamed");
    assert_eq!(store.projects()[0].boxes.len(), 1);
    assert_eq!(store.projects()[1].id, first.id);
}

#[test]
fn remove_existing_id_shrinks_collection() {
    let mut store = ProjectStore::new();
    let keep = Project::new("keep");
    let drop = Project::new("drop");
    store.upsert(keep.clone());
    store.upsert(drop.clone());

    assert!(store.remove(&drop.id));
    assert_eq!(store.len(), 1);
    assert!(store.get(&drop.id).is_none());
    assert!(store.get(&keep.id).is_some());
}

#[test]
fn remove_absent_id_is_noop() {
    let mut store = ProjectStore::new();
    let present = Project::new("present");
    let absent = Project::new("never inserted");
    store.upsert(present.clone());

    assert!(!store.remove(&absent.id));
    assert_eq!(store.len(), 1);
    assert_eq!(store.projects()[0].id, present.id);
}

#[test]
fn encode_decode_preserves_block_details() {
    let mut store = ProjectStore::new();
    let mut project = project_with_blocks("Packing list", &[0, 1, 1, 2]);
    project.boxes[1].text = "Socks".to_string();
    project.boxes[1].bold = true;
    store.upsert(project.clone());

    let decoded = ProjectStore::decode(&store.encode().unwrap()).unwrap();
    let loaded = decoded.get(&project.id).unwrap();
    assert_eq!(loaded, &project);
    assert!(loaded.boxes[1].bold);
    assert_eq!(loaded.boxes[3].level, 2);
}
