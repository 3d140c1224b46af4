use serde_json::{Map, Value, json};

pub const CONFIG_PATH: &str = "tsconfig.json";
/// jsii owns `tsconfig.json`, so libraries get the dev variant.
pub const DEV_CONFIG_PATH: &str = "tsconfig.dev.json";

pub const DEV_DEPENDENCIES: [&str; 3] = [
    "typescript@^5.7.3",
    "@types/node@^22.10.5",
    "ts-node@^10.9.2",
];

pub fn compiler_options() -> Map<String, Value> {
    let value = json!({
        "rootDir": "src",
        "outDir": "lib",
        "alwaysStrict": true,
        "declaration": true,
        "esModuleInterop": true,
        "experimentalDecorators": true,
        "inlineSourceMap": true,
        "inlineSources": true,
        "lib": ["es2020"],
        "module": "CommonJS",
        "noEmitOnError": false,
        "noFallthroughCasesInSwitch": true,
        "noImplicitAny": true,
        "noImplicitReturns": true,
        "noImplicitThis": true,
        "noUnusedLocals": true,
        "noUnusedParameters": true,
        "resolveJsonModule": true,
        "strict": true,
        "strictNullChecks": true,
        "strictPropertyInitialization": true,
        "stripInternal": true,
        "target": "ES2020",
        "allowImportingTsExtensions": true
    });
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

pub fn tsconfig(compiler_options: &Map<String, Value>, include: &[String]) -> Value {
    json!({
        "compilerOptions": compiler_options,
        "include": include,
        "exclude": ["node_modules"]
    })
}
