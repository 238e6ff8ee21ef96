//! Whole-unit generation.
//!
//! [`CodeGenerator::generate`] produces one class per program:
//!
//! ```text
//! .class public <Name>
//! .super <base>
//!
//! .field private static _runTimer LRunTimer;
//! .field private static _standardIn LPascalTextIn;
//! .field private static <var> <descriptor>     (per declaration)
//!
//! .method public <init>()V                      (fixed constructor)
//! .method public static main([Ljava/lang/String;)V
//!     runtime setup, program body, elapsed-time epilogue
//! ```

use pcl_ast::{Program, VarDecl};
use pcl_core::{CodegenError, CodegenWarning};

use crate::bytecode::Listing;
use crate::bytecode::OpCode;
use crate::bytecode::descriptor::{
    PRINT_ELAPSED_TIME, RUN_TIMER_CLASS, RUN_TIMER_FIELD, TEXT_IN_CLASS, TEXT_IN_FIELD, constructor,
    main_signature, object_descriptor,
};
use crate::context::GenerationContext;
use crate::emit::JasminEmitter;
use crate::options::CodegenOptions;
use crate::stmt::StmtCompiler;

type Result<T> = std::result::Result<T, CodegenError>;

/// `.limit locals` and `.limit stack` of the constructor.
const CONSTRUCTOR_LIMIT: u32 = 1;

/// Runtime support objects held in static fields, `(field, class)`.
const RUNTIME_FIELDS: [(&str, &str); 2] = [
    (RUN_TIMER_FIELD, RUN_TIMER_CLASS),
    (TEXT_IN_FIELD, TEXT_IN_CLASS),
];

/// The assembly for one compilation unit.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Name of the generated class.
    pub class_name: String,
    /// File name the assembly should be written to, `<class>.<ext>`.
    pub file_name: String,
    /// The emitted lines.
    pub listing: Listing,
    /// The rendered assembly text.
    pub text: String,
    /// Placeholder diagnostics, in emission order.
    pub warnings: Vec<CodegenWarning>,
}

impl Generated {
    /// Whether every construct got a real instruction and descriptor.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Generates Jasmin assembly for annotated programs.
///
/// Each call to [`generate`](Self::generate) starts from fresh state, so one
/// generator can be reused across units.
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    options: CodegenOptions,
}

impl CodeGenerator {
    /// Create a generator with the given options.
    pub fn new(options: CodegenOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// Generate the assembly for one program.
    ///
    /// Fails only on malformed trees. Type problems produce placeholder
    /// tokens and are reported through [`Generated::warnings`].
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn generate(&self, program: &Program<'_>) -> Result<Generated> {
        log::debug!("generating class {}", program.name);

        let mut ctx = GenerationContext::new(*program, self.options.clone());
        let mut emitter = JasminEmitter::new();

        let mut unit = UnitEmitter {
            ctx: &mut ctx,
            emitter: &mut emitter,
        };
        unit.emit_header();
        unit.emit_declarations(program.decls);
        unit.emit_constructor();
        unit.emit_main(program)?;

        let listing = emitter.finish();
        let warnings = ctx.into_warnings();
        log::debug!(
            "class {}: {} lines, {} warning(s)",
            program.name,
            listing.len(),
            warnings.len()
        );

        Ok(Generated {
            class_name: program.name.to_string(),
            file_name: format!("{}.{}", program.name, self.options.extension),
            text: listing.render(),
            listing,
            warnings,
        })
    }
}

/// Emits the fixed parts of a class around the program body.
struct UnitEmitter<'a, 'ast> {
    ctx: &'a mut GenerationContext<'ast>,
    emitter: &'a mut JasminEmitter,
}

impl<'a, 'ast> UnitEmitter<'a, 'ast> {
    fn emit_header(&mut self) {
        let class = self.ctx.class_name();
        let super_class = &self.ctx.options().super_class;
        self.emitter.directive(format!(".class public {class}"));
        self.emitter.directive(format!(".super {super_class}"));

        self.emitter.blank();
        for (field, class) in RUNTIME_FIELDS {
            let descriptor = object_descriptor(class);
            self.emitter
                .directive(format!(".field private static {field} {descriptor}"));
        }
    }

    /// One static field per declaration, in declaration order.
    ///
    /// A repeated name still gets its own field line; the first declaration
    /// decides the type used by loads and stores.
    fn emit_declarations(&mut self, decls: &[VarDecl<'ast>]) {
        for decl in decls {
            log::debug!("declaration {} : {}", decl.name, decl.ty);

            if self.ctx.options().source_comments {
                self.emitter.blank();
                self.emitter.comment(format!("{} : {}", decl.name, decl.ty));
            }

            if self.ctx.declare(decl).is_some() {
                self.ctx.warn(CodegenWarning::DuplicateDeclaration {
                    name: decl.name.to_string(),
                    span: decl.span,
                });
            }

            let descriptor = self.ctx.descriptor_for(decl.name, decl.ty, decl.span);
            self.emitter
                .directive(format!(".field private static {} {descriptor}", decl.name));
        }
    }

    /// ```text
    /// .method public <init>()V
    ///     aload_0
    ///     invokenonvirtual <base>/<init>()V
    ///     return
    /// ```
    fn emit_constructor(&mut self) {
        let base_init = constructor(&self.ctx.options().super_class);

        self.emitter.blank();
        self.emitter.begin_method("public <init>()V");
        self.emitter.emit(OpCode::ALoad0);
        self.emitter
            .emit_invoke(OpCode::InvokeNonVirtual, &base_init);
        self.emitter.emit(OpCode::Return);
        self.emitter.end_method(CONSTRUCTOR_LIMIT, CONSTRUCTOR_LIMIT);
    }

    fn emit_main(&mut self, program: &Program<'ast>) -> Result<()> {
        self.emitter.blank();
        self.emitter
            .begin_method(&format!("public static {}", main_signature()));

        // Prologue: construct the runtime support objects.
        for (field, class) in RUNTIME_FIELDS {
            let descriptor = object_descriptor(class);
            self.emitter.emit_new(class);
            self.emitter.emit(OpCode::Dup);
            self.emitter
                .emit_invoke(OpCode::InvokeNonVirtual, &constructor(class));
            self.emitter
                .emit_put_static(self.ctx.field(field, &descriptor));
        }

        StmtCompiler::new(self.ctx, self.emitter)
            .compile_block(&program.body)?;

        // Epilogue: report elapsed time.
        let timer = object_descriptor(RUN_TIMER_CLASS);
        self.emitter.blank();
        self.emitter
            .emit_get_static(self.ctx.field(RUN_TIMER_FIELD, &timer));
        self.emitter
            .emit_invoke(OpCode::InvokeVirtual, PRINT_ELAPSED_TIME);
        self.emitter.blank();
        self.emitter.emit(OpCode::Return);

        let options = self.ctx.options();
        self.emitter
            .end_method(options.main_locals_limit, options.main_stack_limit);
        Ok(())
    }
}
