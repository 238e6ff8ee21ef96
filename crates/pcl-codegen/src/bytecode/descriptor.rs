//! Storage descriptors and runtime references.
//!
//! Maps resolved types to JVM field descriptors and names the runtime
//! classes and methods emitted code refers to.

use std::fmt;

use pcl_core::TypeTag;

/// Descriptor written for a type with no storage mapping.
pub const PLACEHOLDER_DESCRIPTOR: &str = "?";

/// Elapsed-time support class.
pub const RUN_TIMER_CLASS: &str = "RunTimer";
/// Text-input support class.
pub const TEXT_IN_CLASS: &str = "PascalTextIn";
/// Static field holding the `RunTimer`.
pub const RUN_TIMER_FIELD: &str = "_runTimer";
/// Static field holding the `PascalTextIn`.
pub const TEXT_IN_FIELD: &str = "_standardIn";
/// Called on the timer in the epilogue.
pub const PRINT_ELAPSED_TIME: &str = "RunTimer.printElapsedTime()V";

/// `System.out`.
pub const SYSTEM_OUT: &str = "java/lang/System/out Ljava/io/PrintStream;";
/// `PrintStream.printf(String, Object...)`.
pub const PRINTF: &str =
    "java/io/PrintStream.printf(Ljava/lang/String;[Ljava/lang/Object;)Ljava/io/PrintStream;";
/// Element class of the printf argument array.
pub const OBJECT_CLASS: &str = "java/lang/Object";
/// Element class of the entry point's argument array.
pub const STRING_CLASS: &str = "java/lang/String";

/// Field descriptor for a resolved type.
///
/// `Integer` is `I`, `Real` is `F`; `Unknown` has none.
pub fn field_descriptor(ty: TypeTag) -> Option<&'static str> {
    match ty {
        TypeTag::Integer => Some("I"),
        TypeTag::Real => Some("F"),
        TypeTag::Unknown => None,
    }
}

/// `L<class>;`
pub fn object_descriptor(class: &str) -> String {
    format!("L{class};")
}

/// `[L<class>;`
pub fn object_array_descriptor(class: &str) -> String {
    format!("[L{class};")
}

/// Name and descriptor of the entry point, `main([Ljava/lang/String;)V`.
pub fn main_signature() -> String {
    format!("main({})V", object_array_descriptor(STRING_CLASS))
}

/// Static method boxing a primitive into its wrapper object.
///
/// Anything that is not `Integer` is boxed as a `Float`.
pub fn boxing_method(ty: TypeTag) -> &'static str {
    match ty {
        TypeTag::Integer => "java/lang/Integer.valueOf(I)Ljava/lang/Integer;",
        TypeTag::Real | TypeTag::Unknown => "java/lang/Float.valueOf(F)Ljava/lang/Float;",
    }
}

/// No-argument constructor reference, `<class>/<init>()V`.
pub fn constructor(class: &str) -> String {
    format!("{class}/<init>()V")
}

/// A static field reference: `<owner>/<name> <descriptor>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef<'a> {
    /// Owning class
    pub owner: &'a str,
    /// Field name
    pub name: &'a str,
    /// Field descriptor
    pub descriptor: &'a str,
}

impl fmt::Display for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.owner, self.name, self.descriptor)
    }
}

/// Net operand stack change of invoking `method`.
///
/// `method` is a reference ending in a method descriptor, e.g.
/// `java/lang/Integer.valueOf(I)Ljava/lang/Integer;`. Instance calls also
/// pop the receiver.
pub fn method_stack_effect(method: &str, has_receiver: bool) -> i32 {
    let (Some(open), Some(close)) = (method.find('('), method.rfind(')')) else {
        return 0;
    };
    let params = descriptor_slots(&method[open + 1..close]);
    let result = match &method[close + 1..] {
        "V" => 0,
        "J" | "D" => 2,
        _ => 1,
    };
    result - params - i32::from(has_receiver)
}

/// Stack slots taken by a sequence of field descriptors.
fn descriptor_slots(params: &str) -> i32 {
    let mut slots = 0;
    let mut chars = params.chars();
    while let Some(c) = chars.next() {
        match c {
            'J' | 'D' => slots += 2,
            'L' => {
                chars.by_ref().find(|&c| c == ';');
                slots += 1;
            }
            '[' => {
                let mut element = chars.next();
                while element == Some('[') {
                    element = chars.next();
                }
                if element == Some('L') {
                    chars.by_ref().find(|&c| c == ';');
                }
                slots += 1;
            }
            _ => slots += 1,
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_descriptors() {
        assert_eq!(field_descriptor(TypeTag::Integer), Some("I"));
        assert_eq!(field_descriptor(TypeTag::Real), Some("F"));
        assert_eq!(field_descriptor(TypeTag::Unknown), None);
    }

    #[test]
    fn object_descriptors() {
        assert_eq!(object_descriptor(RUN_TIMER_CLASS), "LRunTimer;");
        let strings = object_array_descriptor(STRING_CLASS);
        assert_eq!(strings, "[Ljava/lang/String;");
    }

    #[test]
    fn entry_point_signature() {
        assert_eq!(main_signature(), "main([Ljava/lang/String;)V");
    }

    #[test]
    fn field_ref_display() {
        let field = FieldRef {
            owner: "Test",
            name: "x",
            descriptor: "I",
        };
        assert_eq!(field.to_string(), "Test/x I");
    }

    #[test]
    fn boxing() {
        let integer = boxing_method(TypeTag::Integer);
        let real = boxing_method(TypeTag::Real);
        assert!(integer.starts_with("java/lang/Integer.valueOf(I)"));
        assert!(real.starts_with("java/lang/Float.valueOf(F)"));
        assert_eq!(boxing_method(TypeTag::Unknown), real);
    }

    #[test]
    fn invocation_stack_effects() {
        let integer = boxing_method(TypeTag::Integer);
        assert_eq!(method_stack_effect(integer, false), 0);
        assert_eq!(method_stack_effect(PRINTF, true), -2);
        assert_eq!(method_stack_effect(PRINT_ELAPSED_TIME, true), -1);
        assert_eq!(method_stack_effect(&constructor(RUN_TIMER_CLASS), true), -1);
        assert_eq!(method_stack_effect("Foo.bar(JD[[I)J", false), -3);
    }
}
