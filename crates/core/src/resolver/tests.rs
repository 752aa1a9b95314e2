use super::*;

fn raw(names: &[&str]) -> SceneCollection {
	SceneCollection::from_names(names.iter().copied())
}

fn names(scenes: &SceneCollection) -> Vec<&str> {
	scenes.names().collect()
}

#[test]
fn presentation_order_reverses_service_order() {
	let scenes = raw(&["C", "B", "A"]);
	assert_eq!(names(&presentation_order(&scenes)), ["A", "B", "C"]);
}

#[test]
fn presentation_order_is_its_own_inverse() {
	for len in 1..=6 {
		let names: Vec<String> = (0..len).map(|i| format!("scene-{i}")).collect();
		let scenes = SceneCollection::from_names(names);
		assert_eq!(presentation_order(&presentation_order(&scenes)), scenes);
	}
}

#[test]
fn index_counts_from_the_end_of_service_order() {
	let scenes = raw(&["E", "D", "C", "B", "A"]);
	let ordered = presentation_order(&scenes);
	for i in 0..scenes.len() {
		let picked = resolve_by_index(&ordered, i).unwrap();
		assert_eq!(picked, scenes.as_slice()[scenes.len() - 1 - i]);
	}
}

#[test]
fn index_keeps_service_index() {
	let ordered = presentation_order(&raw(&["C", "B", "A"]));
	let picked = resolve_by_index(&ordered, 0).unwrap();
	assert_eq!(picked.name, "A");
	assert_eq!(picked.service_index, 2);
}

#[test]
fn index_past_the_end_is_out_of_bounds() {
	let ordered = presentation_order(&raw(&["B", "A"]));
	let err = resolve_by_index(&ordered, 5).unwrap_err();
	assert!(matches!(err, Error::Index(IndexError::OutOfBounds { index: 5, len: 2 })));
	assert!(err.to_string().contains("only 2 scenes"));

	assert!(resolve_by_index(&ordered, 2).is_err());
	assert!(resolve_by_index(&ordered, 1).is_ok());
}

#[test]
fn forward_toggle_wraps_to_first_scene() {
	// Presentation order [A, B, C].
	let scenes = raw(&["C", "B", "A"]);
	assert_eq!(resolve_toggle(&scenes, "C", false).unwrap().name, "A");
	assert_eq!(resolve_toggle(&scenes, "A", false).unwrap().name, "B");
	assert_eq!(resolve_toggle(&scenes, "B", false).unwrap().name, "C");
}

#[test]
fn backward_toggle_walks_service_order() {
	let scenes = raw(&["C", "B", "A"]);
	assert_eq!(resolve_toggle(&scenes, "A", true).unwrap().name, "C");
	assert_eq!(resolve_toggle(&scenes, "C", true).unwrap().name, "B");
	assert_eq!(resolve_toggle(&scenes, "B", true).unwrap().name, "A");
}

#[test]
fn backward_toggle_undoes_forward_toggle() {
	let scenes = raw(&["D", "C", "B", "A"]);
	for start in ["A", "B", "C", "D"] {
		let forward = resolve_toggle(&scenes, start, false).unwrap();
		let back = resolve_toggle(&scenes, &forward.name, true).unwrap();
		assert_eq!(back.name, start);
	}
}

#[test]
fn single_scene_toggles_onto_itself() {
	let scenes = raw(&["Only"]);
	assert_eq!(resolve_toggle(&scenes, "Only", false).unwrap().name, "Only");
	assert_eq!(resolve_toggle(&scenes, "Only", true).unwrap().name, "Only");
}

#[test]
fn unknown_current_scene_fails_toggle() {
	let scenes = raw(&["B", "A"]);
	let err = resolve_toggle(&scenes, "Gone", false).unwrap_err();
	assert!(matches!(
		err,
		Error::Toggle(ToggleError::CurrentSceneUnknown(ref name)) if name == "Gone"
	));
}

#[test]
fn empty_collection_fails_every_resolution() {
	let empty = SceneCollection::default();

	assert!(matches!(
		resolve_by_index(&empty, 0),
		Err(Error::EmptyCollection(SceneAction::Switch))
	));
	assert!(matches!(
		resolve_toggle(&empty, "A", false),
		Err(Error::EmptyCollection(SceneAction::Switch))
	));
	assert!(matches!(
		resolve_toggle(&empty, "A", true),
		Err(Error::EmptyCollection(SceneAction::Switch))
	));
	assert!(matches!(
		ensure_not_empty(&empty, SceneAction::List),
		Err(Error::EmptyCollection(SceneAction::List))
	));
}
