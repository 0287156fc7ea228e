//! Animator sets: grouping simultaneous animations and chaining phases.
//!
//! A set is built from nodes and ordering relations, then frozen into a
//! computed schedule. Relations follow the usual mobile-toolkit rules:
//!
//! - [`with`](AnimatorSetBuilder::with): both nodes start together.
//!   Siblings share their parents, so a node starts only when every parent
//!   of it and of its siblings has ended.
//! - [`before`](AnimatorSetBuilder::before): the second node starts when
//!   the first ends.
//! - [`after`](AnimatorSetBuilder::after): the first node starts when the
//!   second ends.
//! - [`after_delay`](AnimatorSetBuilder::after_delay): the node starts after
//!   an extra idle delay.
//!
//! A node's own start delay counts toward its end time. Nodes without
//! parents start when the set starts, after the set's start delay.

use std::time::Duration;

use super::traits::{boxed, Animation, BoxedAnimation, PropertyWrite};
use crate::error::SunsetError;

/// Handle to a node added to an [`AnimatorSetBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// An idle node used by [`AnimatorSetBuilder::after_delay`].
#[derive(Debug, Clone, Copy)]
struct Idle(Duration);

impl Animation for Idle {
    fn start_delay(&self) -> Duration {
        Duration::ZERO
    }

    fn active_duration(&self) -> Option<Duration> {
        Some(self.0)
    }

    fn sample(&self, _: Duration, _: Duration, _: &mut Vec<PropertyWrite>) {}

    fn name(&self) -> &'static str {
        "delay"
    }
}

#[derive(Debug)]
struct PendingNode {
    animation: BoxedAnimation,
    parents: Vec<usize>,
}

/// Collects animations and ordering relations for an [`AnimatorSet`].
#[derive(Debug)]
pub struct AnimatorSetBuilder {
    name: &'static str,
    start_delay: Duration,
    nodes: Vec<PendingNode>,
    /// Union-find forest of `with` groups.
    sibling_of: Vec<usize>,
}

impl AnimatorSetBuilder {
    /// Start an empty set.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start_delay: Duration::ZERO,
            nodes: Vec::new(),
            sibling_of: Vec::new(),
        }
    }

    /// Delay the whole set.
    #[must_use]
    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Add an animation with no relations yet.
    pub fn add(&mut self, animation: impl Animation + 'static) -> NodeId {
        self.add_boxed(boxed(animation))
    }

    /// Add an already boxed animation.
    pub fn add_boxed(&mut self, animation: BoxedAnimation) -> NodeId {
        let index = self.nodes.len();
        self.nodes.push(PendingNode {
            animation,
            parents: Vec::new(),
        });
        self.sibling_of.push(index);
        NodeId(index)
    }

    /// `other` starts together with `anchor`.
    pub fn with(&mut self, anchor: NodeId, other: NodeId) {
        let a = self.group_of(anchor.0);
        let b = self.group_of(other.0);
        if a != b {
            self.sibling_of[b] = a;
        }
    }

    /// `then` starts when `first` ends.
    pub fn before(&mut self, first: NodeId, then: NodeId) {
        self.nodes[then.0].parents.push(first.0);
    }

    /// `node` starts when `dependency` ends.
    pub fn after(&mut self, node: NodeId, dependency: NodeId) {
        self.before(dependency, node);
    }

    /// `node` starts only after an extra `delay`.
    pub fn after_delay(&mut self, node: NodeId, delay: Duration) {
        let idle = self.add(Idle(delay));
        self.before(idle, node);
    }

    /// Every node starts together with the first one.
    pub fn play_together(&mut self, nodes: &[NodeId]) {
        if let Some((&anchor, rest)) = nodes.split_first() {
            for &node in rest {
                self.with(anchor, node);
            }
        }
    }

    /// Each node starts when the previous one ends.
    pub fn play_sequentially(&mut self, nodes: &[NodeId]) {
        for pair in nodes.windows(2) {
            self.before(pair[0], pair[1]);
        }
    }

    fn group_of(&self, mut index: usize) -> usize {
        while self.sibling_of[index] != index {
            index = self.sibling_of[index];
        }
        index
    }

    /// Compute the schedule.
    ///
    /// Fails with [`SunsetError::CyclicSchedule`] if a node transitively
    /// depends on itself.
    pub fn build(self) -> Result<AnimatorSet, SunsetError> {
        let count = self.nodes.len();
        let groups: Vec<usize> = (0..count).map(|i| self.group_of(i)).collect();

        // Siblings share parents: collect them per group.
        let mut group_parents: Vec<Vec<usize>> = vec![Vec::new(); count];
        for (index, node) in self.nodes.iter().enumerate() {
            group_parents[groups[index]].extend(node.parents.iter().copied());
        }

        let mut scheduler = Scheduler {
            name: self.name,
            groups: &groups,
            group_parents: &group_parents,
            totals: self
                .nodes
                .iter()
                .map(|node| node.animation.total_duration())
                .collect(),
            starts: vec![Visit::Pending; count],
        };
        let starts = (0..count)
            .map(|index| scheduler.start_of(index))
            .collect::<Result<Vec<_>, _>>()?;

        let mut nodes = Vec::with_capacity(count);
        let mut active = Some(Duration::ZERO);
        for (node, start) in self.nodes.into_iter().zip(starts) {
            if let Some(start) = start {
                let end = node.animation.total_duration().map(|d| start + d);
                active = match (active, end) {
                    (Some(a), Some(e)) => Some(a.max(e)),
                    _ => None,
                };
            }
            nodes.push(ScheduledNode {
                animation: node.animation,
                start,
            });
        }

        log::debug!(
            "built set {} with {} nodes, active for {:?}",
            self.name,
            nodes.len(),
            active
        );
        Ok(AnimatorSet {
            name: self.name,
            start_delay: self.start_delay,
            nodes,
            active,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    InProgress,
    /// Start offset, or `None` if the node never starts.
    Done(Option<Duration>),
}

struct Scheduler<'a> {
    name: &'static str,
    groups: &'a [usize],
    group_parents: &'a [Vec<usize>],
    totals: Vec<Option<Duration>>,
    starts: Vec<Visit>,
}

impl Scheduler<'_> {
    fn start_of(
        &mut self,
        index: usize,
    ) -> Result<Option<Duration>, SunsetError> {
        match self.starts[index] {
            Visit::Done(start) => return Ok(start),
            Visit::InProgress => {
                return Err(SunsetError::CyclicSchedule(format!(
                    "{}: node {index} depends on itself",
                    self.name
                )));
            }
            Visit::Pending => {}
        }
        self.starts[index] = Visit::InProgress;

        let group_parents = self.group_parents;
        let mut start = Some(Duration::ZERO);
        for &parent in &group_parents[self.groups[index]] {
            let parent_end = self
                .start_of(parent)?
                .and_then(|s| self.totals[parent].map(|d| s + d));
            start = match (start, parent_end) {
                (Some(s), Some(e)) => Some(s.max(e)),
                // After an infinite or never-starting parent
                _ => None,
            };
        }

        self.starts[index] = Visit::Done(start);
        Ok(start)
    }
}

#[derive(Debug)]
struct ScheduledNode {
    animation: BoxedAnimation,
    start: Option<Duration>,
}

/// A group of animations with a computed schedule.
///
/// Sets are animations themselves and can be nested. A set is infinite if
/// any member that starts is infinite.
#[derive(Debug)]
pub struct AnimatorSet {
    name: &'static str,
    start_delay: Duration,
    nodes: Vec<ScheduledNode>,
    active: Option<Duration>,
}

impl AnimatorSet {
    /// Number of nodes, including idle delay nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the set has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Scheduled start of a node relative to the set's start (after the
    /// set's own delay). `None` if the node never starts.
    #[must_use]
    pub fn start_of(&self, node: NodeId) -> Option<Duration> {
        self.nodes.get(node.0).and_then(|n| n.start)
    }
}

impl Animation for AnimatorSet {
    fn start_delay(&self) -> Duration {
        self.start_delay
    }

    fn active_duration(&self) -> Option<Duration> {
        self.active
    }

    fn sample(
        &self,
        elapsed: Duration,
        origin: Duration,
        out: &mut Vec<PropertyWrite>,
    ) {
        let Some(local) = elapsed.checked_sub(self.start_delay) else {
            return;
        };
        let base = origin + self.start_delay;
        for node in &self.nodes {
            let Some(start) = node.start else { continue };
            if let Some(node_elapsed) = local.checked_sub(start) {
                node.animation.sample(node_elapsed, base + start, out);
            }
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::property::{PropertyAnimator, RepeatCount, RepeatMode};
    use crate::scene::{ElementId, Property, PropertyValue};
    use crate::util::easing::EasingFunction;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn fade(element: ElementId, millis: u64) -> PropertyAnimator {
        PropertyAnimator::floats(element, Property::Alpha, &[0.0, 1.0], ms(millis))
            .with_easing(EasingFunction::Linear)
    }

    #[test]
    fn with_starts_together_and_before_chains() {
        let mut set = AnimatorSetBuilder::new("test");
        let sun = set.add(fade(ElementId::Sun, 3000));
        let sky = set.add(fade(ElementId::Sky, 2000));
        let night = set.add(fade(ElementId::Moon, 1500));
        set.with(sun, sky);
        set.before(sun, night);
        let set = set.build().unwrap();

        assert_eq!(set.start_of(sun), Some(Duration::ZERO));
        assert_eq!(set.start_of(sky), Some(Duration::ZERO));
        assert_eq!(set.start_of(night), Some(ms(3000)));
        assert_eq!(set.active_duration(), Some(ms(4500)));
    }

    #[test]
    fn siblings_share_parents() {
        let mut set = AnimatorSetBuilder::new("test");
        let first = set.add(fade(ElementId::Sky, 1500));
        let group = set.add(fade(ElementId::Sun, 3000));
        let member = set.add(fade(ElementId::Cloud(0), 500));
        set.before(first, group);
        set.with(group, member);
        let set = set.build().unwrap();

        assert_eq!(set.start_of(member), Some(ms(1500)));
        assert_eq!(set.active_duration(), Some(ms(4500)));
    }

    #[test]
    fn child_start_delay_counts_toward_end() {
        let mut set = AnimatorSetBuilder::new("test");
        let delayed = set.add(fade(ElementId::Moon, 1000).with_delay(ms(2500)));
        let next = set.add(fade(ElementId::Star(0), 1000));
        set.after(next, delayed);
        let set = set.build().unwrap();
        assert_eq!(set.start_of(next), Some(ms(3500)));
    }

    #[test]
    fn after_delay_inserts_idle_time() {
        let mut set = AnimatorSetBuilder::new("test");
        let moon = set.add(fade(ElementId::Moon, 1000));
        set.after_delay(moon, ms(700));
        let set = set.build().unwrap();
        assert_eq!(set.start_of(moon), Some(ms(700)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn play_sequentially_and_together() {
        let mut set = AnimatorSetBuilder::new("test");
        let a = set.add(fade(ElementId::Sun, 100));
        let b = set.add(fade(ElementId::Moon, 200));
        let c = set.add(fade(ElementId::Sky, 300));
        let d = set.add(fade(ElementId::Sea, 50));
        set.play_sequentially(&[a, b, c]);
        set.play_together(&[c, d]);
        let set = set.build().unwrap();
        assert_eq!(set.start_of(c), Some(ms(300)));
        assert_eq!(set.start_of(d), Some(ms(300)));
        assert_eq!(set.active_duration(), Some(ms(600)));
    }

    #[test]
    fn cycles_are_rejected() {
        let mut set = AnimatorSetBuilder::new("loop");
        let a = set.add(fade(ElementId::Sun, 100));
        let b = set.add(fade(ElementId::Moon, 100));
        set.before(a, b);
        set.before(b, a);
        assert!(matches!(set.build(), Err(SunsetError::CyclicSchedule(_))));
    }

    #[test]
    fn infinite_member_makes_set_infinite() {
        let mut set = AnimatorSetBuilder::new("ambient");
        let _ = set.add(
            fade(ElementId::Wave(0), 2000)
                .repeating(RepeatCount::Infinite, RepeatMode::Reverse),
        );
        let _ = set.add(fade(ElementId::Sun, 100));
        let set = set.build().unwrap();
        assert_eq!(set.active_duration(), None);
        assert_eq!(set.total_duration(), None);
    }

    #[test]
    fn nested_sets_shift_by_parent_start_and_delay() {
        let mut inner = AnimatorSetBuilder::new("inner").with_start_delay(ms(500));
        let _ = inner.add(fade(ElementId::Moon, 1000));
        let inner = inner.build().unwrap();
        assert_eq!(inner.total_duration(), Some(ms(1500)));

        let mut outer = AnimatorSetBuilder::new("outer");
        let first = outer.add(fade(ElementId::Sun, 1000));
        let nested = outer.add(inner);
        outer.before(first, nested);
        let outer = outer.build().unwrap();
        assert_eq!(outer.active_duration(), Some(ms(2500)));

        let mut out = Vec::new();
        outer.sample(ms(1499), Duration::ZERO, &mut out);
        assert_eq!(out.len(), 1, "inner set still in its delay");

        out.clear();
        outer.sample(ms(2000), Duration::ZERO, &mut out);
        let moon = out
            .iter()
            .find(|w| w.key.element == ElementId::Moon)
            .unwrap();
        assert_eq!(moon.started_at, ms(1500));
        assert_eq!(moon.value, PropertyValue::Float(0.5));
    }

    #[test]
    fn nodes_not_yet_started_do_not_write() {
        let mut set = AnimatorSetBuilder::new("test");
        let a = set.add(fade(ElementId::Sun, 1000));
        let b = set.add(fade(ElementId::Moon, 1000));
        set.before(a, b);
        let set = set.build().unwrap();

        let mut out = Vec::new();
        set.sample(ms(500), Duration::ZERO, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].key.element, ElementId::Sun);
    }
}
