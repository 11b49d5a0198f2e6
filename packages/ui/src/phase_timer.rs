//! Cancellable one-shot timer for the upload status label.
//!
//! [`PhaseTimer`] is the bookkeeping half: every [`PhaseTimer::arm`] hands out
//! a fresh [`TimerTicket`], and only the ticket that is still armed may fire.
//! A ticket left over from an earlier upload, or one whose upload already
//! settled, is ignored. [`TimerHandle`] is the runtime half: it owns the
//! sleeping task and cancels it on settle or when the component unmounts.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

/// Proof that a timer was armed by a particular call to [`PhaseTimer::arm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhaseTimer {
    issued: u64,
    armed: Option<u64>,
}

impl PhaseTimer {
    /// Arm the timer, replacing any ticket that was armed before.
    pub fn arm(&mut self) -> TimerTicket {
        self.issued += 1;
        self.armed = Some(self.issued);
        TimerTicket(self.issued)
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Consume `ticket`. Returns `true` only if it was the armed one.
    pub fn fire(&mut self, ticket: TimerTicket) -> bool {
        if self.armed == Some(ticket.0) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

/// Platform sleep used by the timer task.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Owner of the spawned timer task.
#[derive(Clone, Default)]
pub struct TimerHandle(Rc<Cell<Option<Task>>>);

impl TimerHandle {
    /// Track `task`, cancelling the one tracked before it.
    pub fn replace(&self, task: Task) {
        if let Some(previous) = self.0.replace(Some(task)) {
            previous.cancel();
        }
    }

    pub fn cancel(&self) {
        if let Some(task) = self.0.take() {
            task.cancel();
        }
    }
}

/// A [`TimerHandle`] whose task is cancelled when the component unmounts.
pub fn use_timer_handle() -> TimerHandle {
    let handle = use_hook(TimerHandle::default);
    let on_unmount = handle.clone();
    use_drop(move || on_unmount.cancel());
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::run_for;

    #[test]
    fn test_armed_ticket_fires_once() {
        let mut timer = PhaseTimer::default();
        let ticket = timer.arm();
        assert!(timer.is_armed());
        assert!(timer.fire(ticket));
        assert!(!timer.is_armed());
        assert!(!timer.fire(ticket));
    }

    #[test]
    fn test_cancelled_ticket_never_fires() {
        let mut timer = PhaseTimer::default();
        let ticket = timer.arm();
        timer.cancel();
        assert!(!timer.fire(ticket));
    }

    #[test]
    fn test_rearming_invalidates_previous_ticket() {
        let mut timer = PhaseTimer::default();
        let first = timer.arm();
        let second = timer.arm();
        assert_ne!(first, second);
        assert!(!timer.fire(first));
        assert!(timer.is_armed());
        assert!(timer.fire(second));
    }

    #[derive(Clone, Default)]
    struct Fired(Rc<Cell<u32>>);

    /// Arms a timer task on mount, optionally cancelling it straight away.
    #[component]
    fn ArmOnMount(cancel: bool) -> Element {
        let fired = use_context::<Fired>();
        let timer = use_timer_handle();
        use_hook(move || {
            timer.replace(spawn(async move {
                sleep(Duration::from_millis(20)).await;
                fired.0.set(fired.0.get() + 1);
            }));
            if cancel {
                timer.cancel();
            }
        });
        rsx! {}
    }

    #[component]
    fn UnmountsTimer() -> Element {
        let mut shown = use_signal(|| true);
        use_hook(move || {
            spawn(async move {
                shown.set(false);
            });
        });
        rsx! {
            if shown() {
                ArmOnMount { cancel: false }
            }
        }
    }

    fn dom_with(fired: &Fired, dom: VirtualDom) -> VirtualDom {
        let mut dom = dom.with_root_context(fired.clone());
        dom.rebuild_in_place();
        dom
    }

    #[tokio::test]
    async fn test_uncancelled_task_runs() {
        let fired = Fired::default();
        let mut dom = dom_with(
            &fired,
            VirtualDom::new_with_props(ArmOnMount, ArmOnMountProps { cancel: false }),
        );
        run_for(&mut dom, Duration::from_millis(150)).await;
        assert_eq!(fired.0.get(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_task_never_runs() {
        let fired = Fired::default();
        let mut dom = dom_with(
            &fired,
            VirtualDom::new_with_props(ArmOnMount, ArmOnMountProps { cancel: true }),
        );
        run_for(&mut dom, Duration::from_millis(150)).await;
        assert_eq!(fired.0.get(), 0);
    }

    #[tokio::test]
    async fn test_unmount_cancels_task() {
        let fired = Fired::default();
        let mut dom = dom_with(&fired, VirtualDom::new(UnmountsTimer));
        run_for(&mut dom, Duration::from_millis(150)).await;
        assert_eq!(fired.0.get(), 0);
    }
}
