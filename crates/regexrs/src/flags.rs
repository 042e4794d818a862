use bitflags::bitflags;

bitflags! {
    /// Flags governing pattern compilation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CompFlags: u32 {
        /// Use extended (ERE) syntax instead of basic (BRE) syntax.
        const EXTENDED = 1 << 0;
        /// Match without regard to ASCII case.
        const IGNORE_CASE = 1 << 1;
        /// Do not report capture positions; only success or failure.
        const NO_CAPTURES = 1 << 2;
        /// Treat newlines as line boundaries for anchors and `.`.
        const NEWLINE = 1 << 3;
    }
}

bitflags! {
    /// Flags governing a single execution.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ExecFlags: u32 {
        /// The start of the input is not the beginning of a line.
        const NOT_LINE_START = 1 << 0;
        /// The end of the input is not the end of a line.
        const NOT_LINE_END = 1 << 1;
    }
}
