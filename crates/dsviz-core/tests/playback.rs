use std::time::Duration;

use dsviz_core::animation::{Command, Recorded, Target, TransitionKind};
use dsviz_core::model::{Layout, Point};
use dsviz_core::{
    animate_operations, AnimationConfig, Diagnostic, LinkedListOperation, Operation, Operations,
    Player, RecordingSurface, Recorder,
};
use tokio::sync::mpsc;

fn init(id: u64, value: &str, next: Option<u64>) -> Operation {
    Operation::new(LinkedListOperation::Init {
        id,
        value: value.into(),
        next,
    })
}

fn set_next(id: u64, next: Option<u64>) -> Operation {
    Operation::new(LinkedListOperation::SetNext { id, next })
}

fn get_next(id: u64) -> Operation {
    Operation::new(LinkedListOperation::GetNext { id })
}

/// (id, value, position, list_index, list_length) for every element of the final frame
fn final_frame(player: &Player<RecordingSurface>) -> Vec<(u64, String, usize, usize, usize)> {
    player
        .frame()
        .iter()
        .map(|e| (e.id, e.value.to_string(), e.position, e.list_index, e.list_length))
        .collect()
}

async fn play(log: &Operations) -> Player<RecordingSurface> {
    let mut player = Player::new(RecordingSurface::new(), AnimationConfig::default());
    player.play(log).await.unwrap();
    player
}

fn sample_log() -> Operations {
    Operations::new(vec![
        init(0, "A", None),
        init(1, "B", Some(0)),
        init(2, "C", None),
        get_next(1),
        set_next(2, Some(1)),
        Operation::new(LinkedListOperation::SetValue { id: 0, value: "Z".into() }),
        get_next(0),
    ])
}

#[tokio::test]
async fn test_distinct_inits_are_singleton_lists() {
    let log = Operations::new((0..5).map(|id| init(id, "v", None)).collect());
    let player = play(&log).await;

    for (i, element) in player.frame().iter().enumerate() {
        assert_eq!(element.list_index, i);
        assert_eq!(element.list_length, 1);
        assert_eq!(element.position, 0);
    }
}

#[tokio::test]
async fn test_two_node_list_materializes_head_first() {
    let log = Operations::new(vec![init(0, "A", None), init(1, "B", Some(0))]);
    let player = play(&log).await;

    assert_eq!(
        final_frame(&player),
        vec![(1, "B".into(), 0, 0, 2), (0, "A".into(), 1, 0, 2)]
    );
}

#[tokio::test]
async fn test_replay_is_idempotent() {
    let log = sample_log();
    let first = play(&log).await;
    let second = play(&log).await;

    assert_eq!(first.frame(), second.frame());
    assert_eq!(first.surface().scene(), second.surface().scene());
}

#[tokio::test]
async fn test_animate_flag_does_not_change_end_state() {
    let animated = sample_log();
    let mut instant = sample_log();
    for entry in &mut instant.operations {
        entry.metadata.animate = false;
    }

    let a = play(&animated).await;
    let b = play(&instant).await;

    assert_eq!(final_frame(&a), final_frame(&b));
    assert_eq!(a.surface().scene(), b.surface().scene());
    assert!(a.surface().elapsed() > Duration::ZERO);
    assert_eq!(b.surface().elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn test_disabled_config_plays_instantly() {
    let config = AnimationConfig {
        enabled: false,
        ..Default::default()
    };
    let mut surface = RecordingSurface::new();
    animate_operations(&mut surface, &sample_log(), &config)
        .await
        .unwrap();
    assert_eq!(surface.elapsed(), Duration::ZERO);
    assert!(surface.groups().count() > 0);
}

#[tokio::test]
async fn test_get_next_walks_from_node_to_successor() {
    let log = Operations::new(vec![init(0, "A", None), init(1, "B", Some(0)), get_next(1)]);
    let player = play(&log).await;
    let layout = Layout::default();

    let translate = player
        .surface()
        .groups()
        .flatten()
        .find(|t| t.target == Target::Pointer && matches!(t.kind, TransitionKind::Translate { .. }))
        .map(|t| t.kind)
        .unwrap();

    assert_eq!(
        translate,
        TransitionKind::Translate {
            from: layout.place(0, 0),
            to: layout.place(1, 0),
        }
    );
    // the pointer ends invisible on node 0
    assert_eq!(player.surface().pointer().opacity, 0.0);
    assert_eq!(player.surface().pointer().at, Some(layout.place(1, 0)));
}

#[tokio::test]
async fn test_get_next_on_missing_element_is_reported() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let log = Operations::new(vec![init(0, "A", None), get_next(1), init(2, "C", None)]);
    let mut player =
        Player::new(RecordingSurface::new(), AnimationConfig::default()).with_diagnostics(tx);

    let report = player.play(&log).await.unwrap();
    assert_eq!(report.steps, 3);
    assert_eq!(report.diagnostics, 1);

    let diagnostics: Vec<Diagnostic> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
    assert!(diagnostics.contains(&Diagnostic::MissingElement { step: 1, id: 1 }));
    // playback continued past the bad entry
    assert!(player.frame().contains(2));
}

#[tokio::test]
async fn test_disconnected_node_exits_but_stays_stored() {
    let log = Operations::new(vec![
        init(1, "B", None),
        init(0, "A", Some(1)),
        init(2, "C", None),
        set_next(1, Some(0)),
    ]);
    let player = play(&log).await;

    assert_eq!(player.frame().ids().collect::<Vec<_>>(), vec![2]);
    assert!(player.store().contains(0) && player.store().contains(1));
    assert_eq!(
        player.surface().scene().keys().copied().collect::<Vec<_>>(),
        vec![2]
    );

    let discarded: Vec<u64> = player
        .surface()
        .log()
        .iter()
        .filter_map(|entry| match entry {
            Recorded::Command(Command::Discard { id }) => Some(*id),
            _ => None,
        })
        .collect();
    assert_eq!(discarded, vec![0, 1]);
}

#[tokio::test]
async fn test_steps_are_strictly_serialized() {
    let player = play(&sample_log()).await;
    let log = player.surface().log();

    let step_markers: Vec<usize> = log
        .iter()
        .filter_map(|entry| match entry {
            Recorded::Step(info) => Some(info.index),
            _ => None,
        })
        .collect();
    assert_eq!(step_markers, (0..7).collect::<Vec<_>>());
    assert!(matches!(log.last(), Some(Recorded::Finished(_))));
}

#[tokio::test]
async fn test_cycle_is_reported_once_and_playback_terminates() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let log = Operations::new(vec![
        init(0, "A", None),
        init(1, "B", Some(0)),
        init(2, "C", Some(1)),
        set_next(0, Some(1)),
        get_next(2),
    ]);
    let mut player =
        Player::new(RecordingSurface::new(), AnimationConfig::default()).with_diagnostics(tx);
    player.play(&log).await.unwrap();

    let cycles = std::iter::from_fn(|| rx.try_recv().ok())
        .filter(|d| matches!(d, Diagnostic::CycleDetected { .. }))
        .count();
    assert_eq!(cycles, 1);
    assert_eq!(player.frame().ids().collect::<Vec<_>>(), vec![2, 1, 0]);
}

#[tokio::test]
async fn test_recorder_log_plays_back() {
    let mut recorder = Recorder::new();
    let a = recorder.init("1", None, &["head = Node(1, None)"]);
    let b = recorder.init("2", None, &["n = Node(2, None)"]);
    recorder.get_next(a, &["while node.next is not None:"]);
    recorder.set_next(a, Some(b), &["node.next = n"]);

    let log = recorder.visualize();
    let player = play(&log).await;
    assert_eq!(final_frame(&player), vec![(0, "1".into(), 0, 0, 2), (1, "2".into(), 1, 0, 2)]);

    let spawned: Vec<Point> = player
        .surface()
        .scene()
        .values()
        .map(|element| element.at)
        .collect();
    assert_eq!(spawned, vec![Point::new(40.0, 40.0), Point::new(190.0, 40.0)]);
}
