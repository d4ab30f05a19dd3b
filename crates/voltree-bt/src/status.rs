/// The result of one evaluation pass over a node.
///
/// `Success` and `Failure` are terminal; `Running` asks the driver for
/// another tick with the node's place preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BtStatus {
    Running,
    Success,
    Failure,
}

impl BtStatus {
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, BtStatus::Running)
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, BtStatus::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, BtStatus::Failure)
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }
}
