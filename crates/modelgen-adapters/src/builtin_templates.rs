//! Built-in default templates and template directory discovery.
//!
//! Every template kind ships a default body (`codetemplate/<kind>-default.template`)
//! that is compiled into the binary. Users override a kind by placing
//! `codetemplate/<kind>.template` under one of the template roots.
//!
//! # Template root resolution order
//!
//! 1. **`$MODELGEN_TEMPLATE_DIR`** - environment variable override.
//! 2. **`./src/main/resources`** - the resource root of a Maven-style project.
//! 3. **`.`** - the current working directory.
//! 4. **`<executable-dir>`** - sibling `codetemplate/` of the installed binary.
//!
//! Only roots that contain a `codetemplate/` directory are returned by
//! [`template_roots`]. Earlier roots win.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Environment variable naming an extra template root.
pub const TEMPLATE_DIR_ENV: &str = "MODELGEN_TEMPLATE_DIR";

/// Directory under each root that holds template files.
pub const TEMPLATE_SUBDIR: &str = "codetemplate";

pub const REPOSITORY: &str = r#"package @Package@;

import @ModelPath@;
import org.springframework.data.jpa.repository.JpaRepository;
import org.springframework.data.jpa.repository.JpaSpecificationExecutor;

public interface @Model@Repository extends JpaRepository<@Model@, @IdType@>, JpaSpecificationExecutor<@Model@> {
}
"#;

pub const SERVICE: &str = r#"package @Package@;

import @ModelPath@;
import org.springframework.data.domain.Page;
import org.springframework.data.domain.Pageable;

import java.util.List;

public interface @Model@Service {

    @Model@ get(@IdType@ id);

    List<@Model@> getAll();

    Page<@Model@> getAll(Pageable pageable);

    @Model@ create(@Model@ model);

    @Model@ update(@Model@ model);

    void delete(@IdType@ id);
}
"#;

pub const SERVICE_IMPL: &str = r#"package @Package@;

import @ModelPath@;
import @RepositoryPath@;
import @ServicePath@;
import org.springframework.beans.factory.annotation.Autowired;
import org.springframework.data.domain.Page;
import org.springframework.data.domain.Pageable;
import org.springframework.stereotype.Service;
import org.springframework.transaction.annotation.Transactional;

import javax.persistence.EntityNotFoundException;
import java.util.List;

@Service
@Transactional(readOnly = true)
public class @Model@ServiceImpl implements @Model@Service {

    @Autowired
    private @Model@Repository @model@Repository;

    @Override
    public @Model@ get(final @IdType@ id) {
        return this.@model@Repository.findById(id)
                .orElseThrow(() -> new EntityNotFoundException("@SeparateModel@ not found: " + id));
    }

    @Override
    public List<@Model@> getAll() {
        return this.@model@Repository.findAll();
    }

    @Override
    public Page<@Model@> getAll(final Pageable pageable) {
        return this.@model@Repository.findAll(pageable);
    }

    @Override
    @Transactional
    public @Model@ create(final @Model@ model) {
        return this.@model@Repository.save(model);
    }

    @Override
    @Transactional
    public @Model@ update(final @Model@ model) {
        return this.@model@Repository.save(model);
    }

    @Override
    @Transactional
    public void delete(final @IdType@ id) {
        this.@model@Repository.deleteById(id);
    }
}
"#;

pub const CONVERTOR: &str = r#"package @Package@;

import @DTOPath@;
import @ModelPath@;
import @ServicePath@;
import org.springframework.beans.factory.annotation.Autowired;
import org.springframework.stereotype.Component;

import java.util.List;
import java.util.stream.Collectors;

@Component
public class @Model@Convertor {

    @Autowired
    private @Model@Service @model@Service;

    public @Model@ toModel(final @Model@DTO dto) {
        final @Model@ model = new @Model@();
        @setModelCode@
        return model;
    }

    public @Model@DTO toDTO(final @Model@ model) {
        final @Model@DTO dto = new @Model@DTO();
        @setDTOCode@
        return dto;
    }

    public List<@Model@DTO> toListDTO(final List<@Model@> models) {
        return models.stream().map(this::toDTO).collect(Collectors.toList());
    }
}
"#;

pub const CONTROLLER: &str = r#"package @Package@;

import @ConvertorPath@;
import @DTOPath@;
import @ModelPath@;
import @ServicePath@;
import org.springframework.beans.factory.annotation.Autowired;
import org.springframework.web.bind.annotation.DeleteMapping;
import org.springframework.web.bind.annotation.GetMapping;
import org.springframework.web.bind.annotation.PathVariable;
import org.springframework.web.bind.annotation.PostMapping;
import org.springframework.web.bind.annotation.PutMapping;
import org.springframework.web.bind.annotation.RequestBody;
import org.springframework.web.bind.annotation.RequestMapping;
import org.springframework.web.bind.annotation.RestController;

import java.util.List;

@RestController
@RequestMapping("/@model@s")
public class @Model@Controller {

    @Autowired
    private @Model@Service @model@Service;

    @Autowired
    private @Model@Convertor @model@Convertor;

    @GetMapping("/{id}")
    public @Model@DTO get(@PathVariable final @IdType@ id) {
        return this.@model@Convertor.toDTO(this.@model@Service.get(id));
    }

    @GetMapping
    public List<@Model@DTO> getAll() {
        return this.@model@Convertor.toListDTO(this.@model@Service.getAll());
    }

    @PostMapping
    public @Model@DTO create(@RequestBody final @Model@DTO dto) {
        final @Model@ model = this.@model@Service.create(this.@model@Convertor.toModel(dto));
        return this.@model@Convertor.toDTO(model);
    }

    @PutMapping("/{id}")
    public @Model@DTO update(@PathVariable final @IdType@ id, @RequestBody final @Model@DTO dto) {
        final @Model@ model = this.@model@Service.update(this.@model@Convertor.toModel(dto));
        return this.@model@Convertor.toDTO(model);
    }

    @DeleteMapping("/{id}")
    public void delete(@PathVariable final @IdType@ id) {
        this.@model@Service.delete(id);
    }
}
"#;

/// Every built-in template keyed by its logical default path.
pub const ALL: [(&str, &str); 5] = [
    ("codetemplate/repository-default.template", REPOSITORY),
    ("codetemplate/service-default.template", SERVICE),
    ("codetemplate/service-impl-default.template", SERVICE_IMPL),
    ("codetemplate/convertor-default.template", CONVERTOR),
    ("codetemplate/controller-default.template", CONTROLLER),
];

/// Built-in body for a logical path.
pub fn get(path: &str) -> Option<&'static str> {
    ALL.iter().find(|(p, _)| *p == path).map(|(_, body)| *body)
}

/// Template roots that exist, in resolution order.
pub fn template_roots() -> Vec<PathBuf> {
    candidate_paths()
        .into_iter()
        .filter(|root| {
            let found = root.join(TEMPLATE_SUBDIR).is_dir();
            debug!(root = %root.display(), found, "Checked template root");
            found
        })
        .collect()
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
        if !dir.trim().is_empty() {
            paths.push(PathBuf::from(dir));
        }
    }

    paths.push(Path::new("src").join("main").join("resources"));
    paths.push(PathBuf::from("."));

    if let Some(dir) = exe_dir() {
        paths.push(dir);
    }

    paths
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelgen_core::domain::ArtifactKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn every_template_kind_has_a_builtin_default() {
        for kind in ArtifactKind::ALL {
            if let Some(paths) = kind.template_paths() {
                assert!(get(paths.default).is_some(), "no default for {kind}");
                assert!(get(paths.custom).is_none());
            }
        }
    }

    #[test]
    fn convertor_carries_both_copy_markers() {
        assert!(CONVERTOR.contains("@setModelCode@"));
        assert!(CONVERTOR.contains("@setDTOCode@"));
    }

    #[test]
    fn env_root_comes_first_when_it_has_templates() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(TEMPLATE_SUBDIR)).unwrap();

        unsafe { std::env::set_var(TEMPLATE_DIR_ENV, dir.path()) };
        let roots = template_roots();
        unsafe { std::env::remove_var(TEMPLATE_DIR_ENV) };

        assert_eq!(roots.first(), Some(&dir.path().to_path_buf()));
    }

    #[test]
    fn candidates_always_include_resource_root() {
        assert!(candidate_paths().contains(&Path::new("src").join("main").join("resources")));
    }
}
