use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply this frame's key state to every human-controlled paddle
pub fn ingest_inputs(world: &mut World, input: &PaddleInput) {
    let dir = input.direction();
    for (_entity, (intent, controller)) in
        world.query_mut::<(&mut PaddleIntent, &Controller)>()
    {
        if *controller == Controller::Human {
            intent.dir = dir;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config};

    #[test]
    fn test_input_drives_only_human_paddle() {
        let mut world = World::new();
        let config = Config::new();
        let human = create_paddle(&mut world, Side::Player, Controller::Human, &config);
        let ai = create_paddle(&mut world, Side::Opponent, Controller::Ai, &config);

        ingest_inputs(&mut world, &PaddleInput::new(false, true));

        assert_eq!(world.get::<&PaddleIntent>(human).unwrap().dir, 1);
        assert_eq!(world.get::<&PaddleIntent>(ai).unwrap().dir, 0, "AI intent untouched");
    }

    #[test]
    fn test_released_keys_stop_paddle() {
        let mut world = World::new();
        let config = Config::new();
        let human = create_paddle(&mut world, Side::Player, Controller::Human, &config);

        ingest_inputs(&mut world, &PaddleInput::new(true, false));
        assert_eq!(world.get::<&PaddleIntent>(human).unwrap().dir, -1);

        ingest_inputs(&mut world, &PaddleInput::default());
        assert_eq!(world.get::<&PaddleIntent>(human).unwrap().dir, 0);
    }
}
