//! Actor Components
//!
//! An actor holds a FIFO queue of worry values, transforms them once per round
//! and routes each one to one of two other actors by a divisibility test.

use serde::{Deserialize, Serialize};

/// A single worry value.
///
/// Wide enough that a value reduced below a `u64` modulus can be squared or
/// multiplied by a `u64` operand without overflowing.
pub type Worry = u128;

/// Index of an actor in the roster
pub type ActorId = usize;

/// Arithmetic applied to every held value when an actor inspects its queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// `old * k`
    Multiply(u64),
    /// `old + k`
    Add(u64),
    /// `old * old`
    Square,
}

impl Transform {
    /// Applies the transform to a single value.
    ///
    /// The result cannot overflow as long as `value` fits in a `u64`, which
    /// holds for every value reduced by the simulation's modulus.
    pub fn apply(self, value: Worry) -> Worry {
        match self {
            Transform::Multiply(k) => value * Worry::from(k),
            Transform::Add(k) => value + Worry::from(k),
            Transform::Square => value * value,
        }
    }
}

/// A stateful participant in the keep-away game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    id: ActorId,
    queue: Vec<Worry>,
    transform: Transform,
    divisor: u64,
    true_target: ActorId,
    false_target: ActorId,
    inspections: u64,
}

impl Actor {
    pub fn new(
        id: ActorId,
        transform: Transform,
        divisor: u64,
        true_target: ActorId,
        false_target: ActorId,
    ) -> Self {
        Self {
            id,
            queue: Vec::new(),
            transform,
            divisor,
            true_target,
            false_target,
            inspections: 0,
        }
    }

    /// Seed the queue with starting values, in order
    pub fn with_items(mut self, items: impl IntoIterator<Item = u64>) -> Self {
        self.queue.extend(items.into_iter().map(Worry::from));
        self
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn items(&self) -> &[Worry] {
        &self.queue
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn divisor(&self) -> u64 {
        self.divisor
    }

    /// `(true_target, false_target)`
    pub fn targets(&self) -> (ActorId, ActorId) {
        (self.true_target, self.false_target)
    }

    /// How many values this actor has inspected so far
    pub fn inspections(&self) -> u64 {
        self.inspections
    }

    /// Where a value would be thrown by the divisibility test
    pub fn route(&self, value: Worry) -> ActorId {
        if value % Worry::from(self.divisor) == 0 {
            self.true_target
        } else {
            self.false_target
        }
    }

    /// Inspect every held value, counting each one
    pub fn apply_transform(&mut self) {
        self.inspections += self.queue.len() as u64;
        let transform = self.transform;
        for value in &mut self.queue {
            *value = transform.apply(*value);
        }
    }

    /// Bring every held value below `modulus`
    pub fn reduce_modulo(&mut self, modulus: u64) {
        let modulus = Worry::from(modulus);
        for value in &mut self.queue {
            *value %= modulus;
        }
    }

    /// Drain the queue into `(divisible, rest)`, each keeping queue order
    pub fn partition_by_divisor(&mut self) -> (Vec<Worry>, Vec<Worry>) {
        let divisor = Worry::from(self.divisor);
        self.queue.drain(..).partition(|value| value % divisor == 0)
    }

    /// Append values to the back of the queue
    pub fn receive(&mut self, values: impl IntoIterator<Item = Worry>) {
        self.queue.extend(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_kinds() {
        assert_eq!(Transform::Multiply(19).apply(79), 1501);
        assert_eq!(Transform::Add(6).apply(54), 60);
        assert_eq!(Transform::Square.apply(79), 6241);
    }

    #[test]
    fn test_transform_does_not_overflow_u64_inputs() {
        let max = Worry::from(u64::MAX);

        assert_eq!(Transform::Square.apply(max), max * max);
        assert_eq!(Transform::Multiply(u64::MAX).apply(max), max * max);
    }

    #[test]
    fn test_apply_transform_counts_inspections() {
        let mut actor = Actor::new(0, Transform::Multiply(19), 23, 2, 3).with_items([79, 98]);

        actor.apply_transform();

        assert_eq!(actor.items(), &[1501, 1862]);
        assert_eq!(actor.inspections(), 2);

        actor.apply_transform();
        assert_eq!(actor.inspections(), 4);
    }

    #[test]
    fn test_empty_queue_inspects_nothing() {
        let mut actor = Actor::new(0, Transform::Square, 13, 1, 2);

        actor.apply_transform();
        let (divisible, rest) = actor.partition_by_divisor();

        assert_eq!(actor.inspections(), 0);
        assert!(divisible.is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn test_reduce_modulo() {
        let mut actor = Actor::new(0, Transform::Add(1), 23, 1, 2).with_items([1501, 1862, 12]);

        actor.reduce_modulo(437);

        assert_eq!(actor.items(), &[190, 114, 12]);
        assert_eq!(actor.inspections(), 0);
    }

    #[test]
    fn test_partition_keeps_order_and_empties_queue() {
        let mut actor = Actor::new(0, Transform::Add(1), 5, 1, 2).with_items([10, 3, 25, 7, 5, 1]);

        let (divisible, rest) = actor.partition_by_divisor();

        assert_eq!(divisible, vec![10, 25, 5]);
        assert_eq!(rest, vec![3, 7, 1]);
        assert!(actor.items().is_empty());
    }

    #[test]
    fn test_receive_appends_in_order() {
        let mut actor = Actor::new(1, Transform::Add(6), 19, 2, 0).with_items([54]);

        actor.receive(vec![500, 620]);
        actor.receive(Vec::new());
        actor.receive(vec![1]);

        assert_eq!(actor.items(), &[54, 500, 620, 1]);
    }

    #[test]
    fn test_route() {
        let actor = Actor::new(2, Transform::Square, 13, 1, 3);

        assert_eq!(actor.route(26), 1);
        assert_eq!(actor.route(27), 3);
        assert_eq!(actor.route(0), 1);
        assert_eq!(actor.targets(), (1, 3));
    }

    #[test]
    fn test_transform_serialization() {
        assert_eq!(
            serde_json::to_string(&Transform::Multiply(19)).unwrap(),
            r#"{"multiply":19}"#
        );
        assert_eq!(serde_json::to_string(&Transform::Square).unwrap(), r#""square""#);

        let parsed: Transform = serde_json::from_str(r#"{"add":6}"#).unwrap();
        assert_eq!(parsed, Transform::Add(6));
    }
}
