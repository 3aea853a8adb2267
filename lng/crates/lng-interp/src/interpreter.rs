//! Tree-walking evaluation: one `execute`/`evaluate` pair per AST shape,
//! driven by the statement and expression dispatch tables in spec.md
//! §4.4. Control flow (`return`/`break`/`continue`) is threaded up as a
//! [`Flow`] value rather than a host exception or panic.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use indexmap::IndexMap;
use lng_parse::ast::{
    BinaryOp, Block, ClassDecl, ClassMember, Expr, ForInit, FunctionDecl, LiteralValue, Program,
    Stmt, UnaryOp, VariableDecl,
};

use crate::class::{ClassDescriptor, Instance};
use crate::control::Flow;
use crate::environment::{EnvRef, Environment};
use crate::error::RuntimeError;
use crate::value::{BoundMethod, NativeFn, UserFunction, Value};

/// An assignment target with its sub-expressions already evaluated, so
/// a compound assignment can read then write the same location.
enum ResolvedTarget {
    Var(String),
    Member { target: Value, member: String },
    Index { target: Value, index: Value },
}

pub struct Interpreter {
    globals: EnvRef,
    environment: EnvRef,
    output: Vec<String>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        let globals = Environment::new_global();
        globals.borrow_mut().define("pf", Value::NativeFunction(NativeFn::Pf));
        globals.borrow_mut().define("clock", Value::NativeFunction(NativeFn::Clock));
        let environment = Rc::clone(&globals);
        Self { globals, environment, output: Vec::new() }
    }

    /// Runs a full program and returns its accumulated `pf` output. A
    /// runtime error stops execution and is appended as a trailing
    /// `"Runtime Error: ..."` line, mirroring the original interpreter's
    /// top-level catch.
    pub fn interpret(&mut self, program: &Program) -> Vec<String> {
        self.output.clear();
        self.environment = Rc::clone(&self.globals);
        for stmt in &program.statements {
            match self.execute(stmt) {
                Ok(_) => {}
                Err(err) => {
                    self.output.push(format!("Runtime Error: {}", err.message));
                    break;
                }
            }
        }
        std::mem::take(&mut self.output)
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<Flow, RuntimeError> {
        match stmt {
            Stmt::Block(block) => {
                let previous = Rc::clone(&self.environment);
                self.environment = Environment::new_child(&previous);
                let result = self.execute_block_body(block);
                self.environment = previous;
                result
            }
            Stmt::VariableDecl(decl) => {
                self.variable_decl(decl)?;
                Ok(Flow::Normal)
            }
            Stmt::FunctionDecl(decl) => {
                self.define_function(decl);
                Ok(Flow::Normal)
            }
            Stmt::ClassDecl(decl) => {
                self.class_decl(decl)?;
                Ok(Flow::Normal)
            }
            Stmt::If { cond, then_branch, else_branch, .. } => {
                if self.evaluate(cond)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }
            Stmt::While { cond, body, .. } => {
                while self.evaluate(cond)?.is_truthy() {
                    match self.execute(body)? {
                        Flow::Break => break,
                        Flow::Return(value) => return Ok(Flow::Return(value)),
                        Flow::Continue | Flow::Normal => {}
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::For { init, cond, update, body, .. } => {
                let previous = Rc::clone(&self.environment);
                self.environment = Environment::new_child(&previous);
                let result = self.run_for_loop(init.as_deref(), cond.as_ref(), update.as_ref(), body);
                self.environment = previous;
                result
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            }
            Stmt::Break { .. } => Ok(Flow::Break),
            Stmt::Continue { .. } => Ok(Flow::Continue),
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            }
        }
    }

    fn execute_block_body(&mut self, block: &Block) -> Result<Flow, RuntimeError> {
        for stmt in &block.statements {
            match self.execute(stmt)? {
                Flow::Normal => {}
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    fn run_for_loop(
        &mut self,
        init: Option<&ForInit>,
        cond: Option<&Expr>,
        update: Option<&Expr>,
        body: &Stmt,
    ) -> Result<Flow, RuntimeError> {
        if let Some(init) = init {
            match init {
                ForInit::VarDecl(decl) => self.variable_decl(decl)?,
                ForInit::Expr(expr) => {
                    self.evaluate(expr)?;
                }
            }
        }
        loop {
            let cond_true = match cond {
                Some(cond) => self.evaluate(cond)?.is_truthy(),
                None => true,
            };
            if !cond_true {
                break;
            }
            match self.execute(body)? {
                Flow::Break => break,
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Continue | Flow::Normal => {}
            }
            if let Some(update) = update {
                self.evaluate(update)?;
            }
        }
        Ok(Flow::Normal)
    }

    fn variable_decl(&mut self, decl: &VariableDecl) -> Result<(), RuntimeError> {
        let value = match &decl.initializer {
            Some(expr) => self.evaluate(expr)?,
            None => Value::Null,
        };
        self.environment.borrow_mut().define(&decl.name, value);
        Ok(())
    }

    /// Captures `self.environment` at declaration time rather than at
    /// call time, so a function returned out of its defining call still
    /// sees the variables that were in scope when it was declared.
    fn define_function(&mut self, decl: &FunctionDecl) {
        let function = Value::Function(Rc::new(UserFunction {
            decl: Rc::new(decl.clone()),
            closure: Rc::clone(&self.environment),
        }));
        self.environment.borrow_mut().define(&decl.name, function);
    }

    fn class_decl(&mut self, decl: &ClassDecl) -> Result<(), RuntimeError> {
        let superclass = match &decl.super_class {
            Some(name) => match Environment::get(&self.environment, name)? {
                Value::Class(class) => Some(class),
                other => {
                    return Err(RuntimeError::new(format!(
                        "superclass '{name}' is not a class (found {})",
                        other.type_name()
                    )));
                }
            },
            None => None,
        };

        let mut methods = lng_util::FxHashMap::default();
        let mut constructor = None;
        for member in &decl.members {
            match member {
                ClassMember::Method(method) => {
                    methods.insert(
                        method.name.clone(),
                        Rc::new(UserFunction {
                            decl: Rc::new(method.clone()),
                            closure: Rc::clone(&self.environment),
                        }),
                    );
                }
                ClassMember::Constructor(ctor) => {
                    let synthetic = FunctionDecl {
                        name: "constructor".to_string(),
                        params: ctor.params.clone(),
                        return_type: None,
                        body: ctor.body.clone(),
                        line: ctor.line,
                    };
                    constructor = Some(Rc::new(UserFunction {
                        decl: Rc::new(synthetic),
                        closure: Rc::clone(&self.environment),
                    }));
                }
                ClassMember::Field(_) => {
                    // Fields carry no default value on the descriptor; they
                    // come into existence on first write (spec.md's class
                    // instance shape has no field-defaults slot).
                }
            }
        }

        let descriptor =
            Rc::new(ClassDescriptor { name: decl.name.clone(), superclass, methods, constructor });
        self.environment.borrow_mut().define(&decl.name, Value::Class(descriptor));
        Ok(())
    }

    fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal { value, .. } => Ok(match value {
                LiteralValue::Int(n) => Value::Int(*n),
                LiteralValue::Float(n) => Value::Float(*n),
                LiteralValue::Str(s) => Value::Str(Rc::from(s.as_str())),
                LiteralValue::Bool(b) => Value::Bool(*b),
                LiteralValue::Null => Value::Null,
            }),
            Expr::Identifier { name, .. } => Environment::get(&self.environment, name),
            Expr::BinaryOp { left, op, right, .. } => match op {
                BinaryOp::And => {
                    if !self.evaluate(left)?.is_truthy() {
                        return Ok(Value::Bool(false));
                    }
                    Ok(Value::Bool(self.evaluate(right)?.is_truthy()))
                }
                BinaryOp::Or => {
                    if self.evaluate(left)?.is_truthy() {
                        return Ok(Value::Bool(true));
                    }
                    Ok(Value::Bool(self.evaluate(right)?.is_truthy()))
                }
                _ => {
                    let left = self.evaluate(left)?;
                    let right = self.evaluate(right)?;
                    self.apply_binary_op(*op, left, right)
                }
            },
            Expr::UnaryOp { op, operand, .. } => {
                let value = self.evaluate(operand)?;
                match op {
                    UnaryOp::Minus => match value {
                        Value::Int(n) => Ok(Value::Int(-n)),
                        Value::Float(n) => Ok(Value::Float(-n)),
                        other => Err(self.type_error("unary -", &other)),
                    },
                    UnaryOp::Not => Ok(Value::Bool(!value.is_truthy())),
                }
            }
            Expr::FunctionCall { callee, arguments, .. } => {
                let callee = self.evaluate(callee)?;
                let mut evaluated = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    evaluated.push(self.evaluate(argument)?);
                }
                self.call(callee, evaluated)
            }
            Expr::MemberAccess { target, member, .. } => {
                let target = self.evaluate(target)?;
                self.member_access(target, member)
            }
            Expr::IndexAccess { target, index, .. } => {
                let target = self.evaluate(target)?;
                let index = self.evaluate(index)?;
                self.index_access(target, index)
            }
            Expr::ArrayLiteral { elements, .. } => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    items.push(self.evaluate(element)?);
                }
                Ok(Value::Array(Rc::new(RefCell::new(items))))
            }
            Expr::ObjectLiteral { properties, .. } => {
                let mut map = IndexMap::new();
                for (key, value_expr) in properties {
                    let value = self.evaluate(value_expr)?;
                    map.insert(key.clone(), value);
                }
                Ok(Value::Object(Rc::new(RefCell::new(map))))
            }
            Expr::Assignment { target, op, value, .. } => {
                let new_value = self.evaluate(value)?;
                let resolved = self.resolve_target(target)?;
                let final_value = match op.binary_op() {
                    None => new_value,
                    Some(binary_op) => {
                        let current = self.read_target(&resolved)?;
                        self.apply_binary_op(binary_op, current, new_value)?
                    }
                };
                self.write_target(resolved, final_value.clone())?;
                Ok(final_value)
            }
        }
    }

    fn member_access(&self, target: Value, member: &str) -> Result<Value, RuntimeError> {
        match target {
            Value::Instance(instance) => {
                if let Some(value) = instance.borrow().fields.get(member).cloned() {
                    return Ok(value);
                }
                let class = Rc::clone(&instance.borrow().class);
                match class.find_method(member) {
                    Some(method) => {
                        Ok(Value::BoundMethod(Rc::new(BoundMethod { instance, method })))
                    }
                    None => Err(RuntimeError::new(format!(
                        "'{}' has no member '{member}'",
                        class.name
                    ))),
                }
            }
            Value::Object(fields) => fields
                .borrow()
                .get(member)
                .cloned()
                .ok_or_else(|| RuntimeError::new(format!("key '{member}' not found"))),
            other => Err(RuntimeError::new(format!(
                "cannot access member '{member}' on a value of type '{}'",
                other.type_name()
            ))),
        }
    }

    fn index_access(&self, target: Value, index: Value) -> Result<Value, RuntimeError> {
        match target {
            Value::Array(items) => {
                let idx = Self::expect_int_index(index)?;
                let items = items.borrow();
                usize::try_from(idx)
                    .ok()
                    .and_then(|i| items.get(i).cloned())
                    .ok_or_else(|| RuntimeError::new(format!("array index {idx} out of range")))
            }
            Value::Object(fields) => {
                let key = Self::expect_string_key(index)?;
                fields
                    .borrow()
                    .get(&key)
                    .cloned()
                    .ok_or_else(|| RuntimeError::new(format!("key '{key}' not found")))
            }
            other => Err(RuntimeError::new(format!(
                "cannot index into a value of type '{}'",
                other.type_name()
            ))),
        }
    }

    /// Evaluates an assignment target's sub-expressions exactly once,
    /// producing a location that can be read then written without
    /// re-running them. A target like `a[next()]` must resolve `next()`
    /// a single time so a compound assignment's read and write land on
    /// the same slot.
    fn resolve_target(&mut self, target: &Expr) -> Result<ResolvedTarget, RuntimeError> {
        match target {
            Expr::Identifier { name, .. } => Ok(ResolvedTarget::Var(name.clone())),
            Expr::MemberAccess { target, member, .. } => {
                let target = self.evaluate(target)?;
                Ok(ResolvedTarget::Member { target, member: member.clone() })
            }
            Expr::IndexAccess { target, index, .. } => {
                let target = self.evaluate(target)?;
                let index = self.evaluate(index)?;
                Ok(ResolvedTarget::Index { target, index })
            }
            _ => Err(RuntimeError::new("invalid assignment target")),
        }
    }

    fn read_target(&self, resolved: &ResolvedTarget) -> Result<Value, RuntimeError> {
        match resolved {
            ResolvedTarget::Var(name) => Environment::get(&self.environment, name),
            ResolvedTarget::Member { target, member } => {
                self.member_access(target.clone(), member)
            }
            ResolvedTarget::Index { target, index } => {
                self.index_access(target.clone(), index.clone())
            }
        }
    }

    fn write_target(&mut self, resolved: ResolvedTarget, value: Value) -> Result<(), RuntimeError> {
        match resolved {
            ResolvedTarget::Var(name) => Environment::assign(&self.environment, &name, value),
            ResolvedTarget::Member { target, member } => match target {
                Value::Instance(instance) => {
                    instance.borrow_mut().fields.insert(member, value);
                    Ok(())
                }
                Value::Object(fields) => {
                    fields.borrow_mut().insert(member, value);
                    Ok(())
                }
                other => Err(RuntimeError::new(format!(
                    "cannot assign to member of a value of type '{}'",
                    other.type_name()
                ))),
            },
            ResolvedTarget::Index { target, index } => match target {
                Value::Array(items) => {
                    let idx = Self::expect_int_index(index)?;
                    let mut items = items.borrow_mut();
                    let i = usize::try_from(idx)
                        .ok()
                        .filter(|&i| i < items.len())
                        .ok_or_else(|| {
                            RuntimeError::new(format!("array index {idx} out of range"))
                        })?;
                    items[i] = value;
                    Ok(())
                }
                Value::Object(fields) => {
                    let key = Self::expect_string_key(index)?;
                    fields.borrow_mut().insert(key, value);
                    Ok(())
                }
                other => Err(RuntimeError::new(format!(
                    "cannot index-assign into a value of type '{}'",
                    other.type_name()
                ))),
            },
        }
    }

    fn expect_int_index(value: Value) -> Result<i64, RuntimeError> {
        match value {
            Value::Int(n) => Ok(n),
            other => Err(RuntimeError::new(format!(
                "array index must be an int, found {}",
                other.type_name()
            ))),
        }
    }

    fn expect_string_key(value: Value) -> Result<String, RuntimeError> {
        match value {
            Value::Str(s) => Ok(s.to_string()),
            other => Err(RuntimeError::new(format!(
                "object key must be a string, found {}",
                other.type_name()
            ))),
        }
    }

    fn call(&mut self, callee: Value, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        match callee {
            Value::NativeFunction(native) => self.call_native(native, arguments),
            Value::Function(function) => self.call_user_function(&function, None, arguments),
            Value::BoundMethod(bound) => self.call_user_function(
                &bound.method,
                Some(Value::Instance(Rc::clone(&bound.instance))),
                arguments,
            ),
            Value::Class(class) => self.instantiate(&class, arguments),
            other => Err(RuntimeError::new(format!(
                "cannot call a value of type '{}'",
                other.type_name()
            ))),
        }
    }

    fn call_native(&mut self, native: NativeFn, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        match native {
            NativeFn::Pf => {
                let line = arguments.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
                self.output.push(line);
                Ok(Value::Null)
            }
            NativeFn::Clock => {
                let seconds = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map_err(|_| RuntimeError::new("system clock is before the UNIX epoch"))?
                    .as_secs_f64();
                Ok(Value::Float(seconds))
            }
        }
    }

    fn call_user_function(
        &mut self,
        function: &Rc<UserFunction>,
        this: Option<Value>,
        arguments: Vec<Value>,
    ) -> Result<Value, RuntimeError> {
        if arguments.len() != function.decl.params.len() {
            return Err(RuntimeError::new(format!(
                "'{}' expects {} argument(s) but got {}",
                function.decl.name,
                function.decl.params.len(),
                arguments.len()
            )));
        }
        let call_env = Environment::new_child(&function.closure);
        if let Some(this) = this {
            call_env.borrow_mut().define("this", this);
        }
        for (param, argument) in function.decl.params.iter().zip(arguments) {
            call_env.borrow_mut().define(&param.name, argument);
        }
        let previous = Rc::clone(&self.environment);
        self.environment = call_env;
        let result = self.execute_block_body(&function.decl.body);
        self.environment = previous;
        match result? {
            Flow::Return(value) => Ok(value),
            _ => Ok(Value::Null),
        }
    }

    fn instantiate(&mut self, class: &Rc<ClassDescriptor>, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        let instance =
            Rc::new(RefCell::new(Instance { class: Rc::clone(class), fields: lng_util::FxHashMap::default() }));
        match class.find_constructor() {
            Some(constructor) => {
                if arguments.len() != constructor.decl.params.len() {
                    return Err(RuntimeError::new(format!(
                        "constructor of '{}' expects {} argument(s) but got {}",
                        class.name,
                        constructor.decl.params.len(),
                        arguments.len()
                    )));
                }
                let call_env = Environment::new_child(&constructor.closure);
                call_env.borrow_mut().define("this", Value::Instance(Rc::clone(&instance)));
                for (param, argument) in constructor.decl.params.iter().zip(arguments) {
                    call_env.borrow_mut().define(&param.name, argument);
                }
                let previous = Rc::clone(&self.environment);
                self.environment = call_env;
                let result = self.execute_block_body(&constructor.decl.body);
                self.environment = previous;
                if let Flow::Return(value) = result? {
                    if !matches!(value, Value::Null) {
                        return Err(RuntimeError::new(format!(
                            "constructor of '{}' cannot return a value",
                            class.name
                        )));
                    }
                }
            }
            None if !arguments.is_empty() => {
                return Err(RuntimeError::new(format!(
                    "'{}' has no constructor but got {} argument(s)",
                    class.name,
                    arguments.len()
                )));
            }
            None => {}
        }
        Ok(Value::Instance(instance))
    }

    fn apply_binary_op(&self, op: BinaryOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
        match op {
            BinaryOp::Plus => self.add(left, right),
            BinaryOp::Minus => self.numeric_op(left, right, |a, b| a - b, |a, b| a - b),
            BinaryOp::Mul => self.numeric_op(left, right, |a, b| a * b, |a, b| a * b),
            BinaryOp::Div => self.divide(left, right),
            BinaryOp::Mod => self.modulo(left, right),
            BinaryOp::Greater => self.compare(left, right, op),
            BinaryOp::GreaterEq => self.compare(left, right, op),
            BinaryOp::Less => self.compare(left, right, op),
            BinaryOp::LessEq => self.compare(left, right, op),
            BinaryOp::EqEq => Ok(Value::Bool(left.values_equal(&right))),
            BinaryOp::NotEq => Ok(Value::Bool(!left.values_equal(&right))),
            BinaryOp::And | BinaryOp::Or => unreachable!("short-circuited in evaluate()"),
        }
    }

    fn add(&self, left: Value, right: Value) -> Result<Value, RuntimeError> {
        match (left, right) {
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(Rc::from(format!("{a}{b}")))),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
            (left, right) => {
                let (a, b) = self.numeric_pair(left, right)?;
                Ok(Value::Float(a + b))
            }
        }
    }

    fn numeric_op(
        &self,
        left: Value,
        right: Value,
        int_op: fn(i64, i64) -> i64,
        float_op: fn(f64, f64) -> f64,
    ) -> Result<Value, RuntimeError> {
        if let (Value::Int(a), Value::Int(b)) = (&left, &right) {
            return Ok(Value::Int(int_op(*a, *b)));
        }
        let (a, b) = self.numeric_pair(left, right)?;
        Ok(Value::Float(float_op(a, b)))
    }

    /// `/` always performs true division and returns a float, matching
    /// the host language's `/` operator regardless of operand types.
    fn divide(&self, left: Value, right: Value) -> Result<Value, RuntimeError> {
        let (a, b) = self.numeric_pair(left, right)?;
        if b == 0.0 {
            return Err(RuntimeError::new("division by zero"));
        }
        Ok(Value::Float(a / b))
    }

    fn modulo(&self, left: Value, right: Value) -> Result<Value, RuntimeError> {
        if let (Value::Int(a), Value::Int(b)) = (&left, &right) {
            if *b == 0 {
                return Err(RuntimeError::new("division by zero"));
            }
            return Ok(Value::Int(a % b));
        }
        let (a, b) = self.numeric_pair(left, right)?;
        if b == 0.0 {
            return Err(RuntimeError::new("division by zero"));
        }
        Ok(Value::Float(a % b))
    }

    fn compare(&self, left: Value, right: Value, op: BinaryOp) -> Result<Value, RuntimeError> {
        let ordering = match (&left, &right) {
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            _ => {
                let (a, b) = self.numeric_pair(left, right)?;
                a.partial_cmp(&b).ok_or_else(|| RuntimeError::new("cannot compare NaN"))?
            }
        };
        let result = match op {
            BinaryOp::Greater => ordering == Ordering::Greater,
            BinaryOp::GreaterEq => ordering != Ordering::Less,
            BinaryOp::Less => ordering == Ordering::Less,
            BinaryOp::LessEq => ordering != Ordering::Greater,
            _ => unreachable!("compare() only called for ordering operators"),
        };
        Ok(Value::Bool(result))
    }

    fn numeric_pair(&self, left: Value, right: Value) -> Result<(f64, f64), RuntimeError> {
        let a = Self::as_f64(left)?;
        let b = Self::as_f64(right)?;
        Ok((a, b))
    }

    fn as_f64(value: Value) -> Result<f64, RuntimeError> {
        match value {
            Value::Int(n) => Ok(n as f64),
            Value::Float(n) => Ok(n),
            other => Err(RuntimeError::new(format!(
                "unsupported operand type '{}' for a numeric operator",
                other.type_name()
            ))),
        }
    }

    fn type_error(&self, op: &str, value: &Value) -> RuntimeError {
        RuntimeError::new(format!("unsupported operand type '{}' for {op}", value.type_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> Vec<String> {
        let (program, errors) = lng_parse::parse(source);
        assert!(errors.is_empty(), "source must parse cleanly: {errors:?}");
        Interpreter::new().interpret(&program)
    }

    #[test]
    fn arithmetic_and_pf_output() {
        let output = run("pf(1 + 2 * 3);");
        assert_eq!(output, vec!["7"]);
    }

    #[test]
    fn division_always_produces_a_float() {
        let output = run("pf(4 / 2);");
        assert_eq!(output, vec!["2"]);
    }

    #[test]
    fn string_concatenation() {
        let output = run(r#"pf("a" + "b");"#);
        assert_eq!(output, vec!["ab"]);
    }

    #[test]
    fn closures_capture_their_declaration_environment() {
        let output = run(
            r#"
            function make_counter() {
                var count = 0;
                function increment() {
                    count = count + 1;
                    return count;
                }
                return increment;
            }
            var counter = make_counter();
            pf(counter());
            pf(counter());
            "#,
        );
        assert_eq!(output, vec!["1", "2"]);
    }

    #[test]
    fn classes_support_fields_methods_and_inheritance() {
        let output = run(
            r#"
            class Animal {
                constructor(name) {
                    this.name = name;
                }
                function speak() {
                    return this.name;
                }
            }
            class Dog extends Animal {
                function bark() {
                    return this.speak() + "!";
                }
            }
            var d = Dog("Rex");
            pf(d.bark());
            "#,
        );
        assert_eq!(output, vec!["Rex!"]);
    }

    #[test]
    fn logical_operators_short_circuit() {
        let output = run(
            r#"
            function boom() {
                pf("should not run");
                return true;
            }
            pf(false && boom());
            pf(true || boom());
            "#,
        );
        assert_eq!(output, vec!["false", "true"]);
    }

    #[test]
    fn loops_support_break_and_continue() {
        let output = run(
            r#"
            var i = 0;
            while (i < 5) {
                i = i + 1;
                if (i == 2) { continue; }
                if (i == 4) { break; }
                pf(i);
            }
            "#,
        );
        assert_eq!(output, vec!["1", "3"]);
    }

    #[test]
    fn arrays_and_objects_support_indexing() {
        let output = run(
            r#"
            var xs = [1, 2, 3];
            xs[1] = 99;
            pf(xs[1]);
            var obj = { a: 1 };
            obj["b"] = 2;
            pf(obj.b);
            "#,
        );
        assert_eq!(output, vec!["99", "2"]);
    }

    #[test]
    fn calling_a_function_with_the_wrong_arity_is_a_runtime_error() {
        let output = run(
            r#"
            function needs_two(a, b) { return a + b; }
            pf(needs_two(1));
            "#,
        );
        assert_eq!(output.len(), 1);
        assert!(output[0].starts_with("Runtime Error:"));
    }

    #[test]
    fn compound_assignment_resolves_its_index_expression_only_once() {
        let output = run(
            r#"
            function make_indexer() {
                var calls = 0;
                function next() {
                    calls = calls + 1;
                    return calls - 1;
                }
                return next;
            }
            var idx = make_indexer();
            var a = [10, 20, 30];
            a[idx()] += 5;
            pf(a[0]);
            pf(a[1]);
            pf(a[2]);
            "#,
        );
        assert_eq!(output, vec!["15", "20", "30"]);
    }

    #[test]
    fn dividing_by_zero_is_a_runtime_error() {
        let output = run("pf(1 / 0);");
        assert_eq!(output.len(), 1);
        assert!(output[0].starts_with("Runtime Error:"));
    }
}
