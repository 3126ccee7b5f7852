pub mod configuration;

pub mod expression {
    pub mod token;
    pub mod ast;
    pub mod function;
    pub mod parser;
    pub mod evaluator;
}

pub mod quadrature {
    pub mod request;
    pub mod trapezoid;
}

pub mod exact {
    pub mod antiderivative;
    pub mod reference;
}

pub mod report {
    pub mod summary;
}

pub mod pipeline;
