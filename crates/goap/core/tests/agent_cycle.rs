use goap_core::{
    ActionKind, ActionRule, Agent, AgentConfig, Goal, PcgRng, Planner, TablePlanner, WorldState,
    roll_under_attack,
};

fn run(state: &mut WorldState, actions: &[ActionKind]) {
    for action in actions {
        if action.can_execute(state) {
            action.execute(state);
        }
    }
}

#[test]
fn forced_attack_then_cycle_flees() {
    let mut agent = Agent::new(true);
    agent.set_under_attack(true);

    let report = agent.perform_actions();

    assert_eq!(report.plan.as_slice(), &[ActionKind::Flee]);
    assert_eq!(report.executed().collect::<Vec<_>>(), vec![ActionKind::Flee]);
    assert!(!agent.state().is_under_attack());
    assert!(agent.snapshot().fled_successfully);

    // Fleeing is the whole cycle; needs are untouched.
    assert_eq!(agent.state().hunger(), 100);
    assert_eq!(agent.state().thirst(), 100);
}

#[test]
fn hunger_plan_executes_to_half_hunger() {
    let mut state = WorldState::new();

    let plan = TablePlanner.plan(&state, Goal::SatisfyHunger);
    assert_eq!(plan.as_slice(), &[ActionKind::SearchFood, ActionKind::Eat]);

    run(&mut state, &plan);
    assert!(!state.has_food());
    assert_eq!(state.hunger(), 50);
}

#[test]
fn holding_food_eats_to_zero() {
    let mut state = WorldState::new();
    state.set_food(true);
    state.set_hunger(50);

    let plan = TablePlanner.plan(&state, Goal::SatisfyHunger);
    assert_eq!(plan.as_slice(), &[ActionKind::Eat]);

    run(&mut state, &plan);
    assert!(!state.has_food());
    assert_eq!(state.hunger(), 0);
}

#[test]
fn empty_plan_leaves_state_unchanged() {
    let mut state = WorldState::new();
    state.set_thirst(0);
    let before = state;

    let plan = TablePlanner.plan(&state, Goal::SatisfyThirst);
    assert!(plan.is_empty());

    run(&mut state, &plan);
    assert_eq!(state, before);
}

#[test]
fn needs_alternate_until_satisfied() {
    let mut agent = Agent::new(false);
    let mut goals = Vec::new();

    for _ in 0..4 {
        goals.push(agent.perform_actions().goal);
    }

    // Hunger wins ties, then thirst is larger, and so on.
    assert_eq!(
        goals,
        vec![
            Goal::SatisfyHunger,
            Goal::SatisfyThirst,
            Goal::SatisfyHunger,
            Goal::SatisfyThirst,
        ]
    );
    assert_eq!(agent.state().hunger(), 0);
    assert_eq!(agent.state().thirst(), 0);

    // Fully satisfied: nothing left to plan.
    let report = agent.perform_actions();
    assert!(report.plan.is_empty());
    assert_eq!(agent.state().hunger(), 0);
    assert_eq!(agent.state().thirst(), 0);
}

#[test]
fn attack_mid_run_preempts_needs() {
    let mut agent = Agent::new(false);
    agent.perform_actions();
    let before = *agent.state();

    agent.set_under_attack(true);
    let report = agent.perform_actions();

    assert_eq!(report.goal, Goal::SatisfyHunger);
    assert_eq!(report.executed().collect::<Vec<_>>(), vec![ActionKind::Flee]);
    assert_eq!(agent.state().hunger(), before.hunger());
    assert_eq!(agent.state().thirst(), before.thirst());
    assert!(!agent.state().is_under_attack());
}

#[test]
fn same_seed_same_start() {
    let config = AgentConfig::new(1234);
    let first = Agent::spawn(&config, &PcgRng);
    let second = Agent::spawn(&config, &PcgRng);

    assert_eq!(first.state(), second.state());
    assert_eq!(
        first.state().is_under_attack(),
        roll_under_attack(&PcgRng, 1234, AgentConfig::DEFAULT_ATTACK_ONE_IN)
    );
}
